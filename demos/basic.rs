use qsparams::QueryParams;

fn main() {
    // Parse a query string
    let params = QueryParams::parse("?name=pxy&version=1.0.0&tag=cli&tag=url");

    println!("Query: {params}"); // name=pxy&version=1.0.0&tag=cli&tag=url
    println!("name: {:?}", params.get("name")); // Some("pxy")
    println!("tag: {:?}", params.get_all("tag")); // ["cli", "url"]
    println!("missing: {:?}", params.get("missing")); // None
}
