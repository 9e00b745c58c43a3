use mediator::request;
use mediator::request::Request;

#[request(response = String, name = "GetGreeting")]
struct Greeting {
    who: String,
}

#[request(response = Vec<u8>)]
enum Encode {
    Text(String),
    Empty,
}

fn main() {
    assert_eq!(<Greeting as Request>::NAME, "GetGreeting");
    let _s: <Greeting as Request>::Response = String::new();
    let _g = Greeting { who: "w".into() };

    assert_eq!(<Encode as Request>::NAME, "Encode");
    let _v: <Encode as Request>::Response = Vec::new();
    let _ = (Encode::Text("x".into()), Encode::Empty);
}
