use judo_core::Grammar;

fn main() {
    let input = "{\"name\": \"judo\", \"tags\": [\"parser\", \"combinator\"], \"stars\": 3}";

    println!("Input: {input}\n");

    let grammar = Grammar::new();
    match grammar.parse(input) {
        Ok(value) => {
            println!("Parsed: {value}");
            if let Some(name) = value.get("name").and_then(|v| v.as_str()) {
                println!("name: {name:?}");
            }
            if let Some(tags) = value.get("tags").and_then(|v| v.as_array()) {
                println!("tags: {} entries", tags.len());
            }
        }
        Err(err) => println!("Parse failed: {err}"),
    }
}
