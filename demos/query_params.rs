/// `QueryParams` usage example
use std::collections::BTreeMap;

use qsparams::QueryParams;

fn main() {
    // Parse a query string
    let mut params = QueryParams::parse("name=John&age=30&city=Tokyo");

    println!("name: {:?}", params.get("name")); // Some("John")
    println!("age: {:?}", params.get("age")); // Some("30")
    println!();

    // Append values; `+` and `%XX` in appended values are decoded
    params.append("hobby", "go").append("hobby", ["rust", "rock+climbing"]);
    println!("After append: {params}"); // name=John&age=30&city=Tokyo&hobby=go&hobby=rust&hobby=rock+climbing
    println!();

    // Set (replaces all values, stored as given)
    params.set("age", 31);
    println!("After set: {params}"); // name=John&age=31&city=Tokyo&hobby=go&hobby=rust&hobby=rock+climbing
    println!();

    // Delete a parameter
    params.delete("city");
    println!("After delete: {params}"); // name=John&age=31&hobby=go&hobby=rust&hobby=rock+climbing
    println!();

    // Sort names, then each name's values
    params.sort();
    println!("After sort: {params}"); // age=31&hobby=go&hobby=rock+climbing&hobby=rust&name=John
    println!();

    // Other construction shapes
    let from_pairs = QueryParams::from_pairs([("q", "ferris"), ("page", "2")]);
    println!("From pairs: {from_pairs}"); // q=ferris&page=2

    let mut mapping = BTreeMap::new();
    mapping.insert("lang", "en");
    mapping.insert("sym", "(!)");
    println!("From mapping: {}", QueryParams::from_mapping(mapping)); // lang=en&sym=%28%21%29
    println!();

    // Iterate over all parameters
    println!("All parameters:");
    params.for_each(|value, name, _| println!("  {name} = {value}"));
}
