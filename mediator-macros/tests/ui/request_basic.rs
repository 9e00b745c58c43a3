use mediator::request;
use mediator::request::Request;

#[request]
struct Ping {
    seq: u32,
}

#[request]
#[derive(Default)]
struct Clear;

fn main() {
    // 名称默认取类型名，响应默认为 ()
    assert_eq!(<Ping as Request>::NAME, "Ping");
    let _unit: <Ping as Request>::Response = ();

    // 派生 Debug/Clone/PartialEq/Serialize/Deserialize
    let p = Ping { seq: 1 };
    let q = p.clone();
    assert_eq!(p, q);
    let _ = format!("{:?}", p);

    // 已有 derive 保留并合并
    let _c = Clear::default();
    assert_eq!(<Clear as Request>::NAME, "Clear");
}
