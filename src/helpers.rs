/// Fast check if a component contains bytes the decoder rewrites (`+` or `%`)
pub fn needs_decoding(input: &str) -> bool {
    memchr::memchr2(b'+', b'%', input.as_bytes()).is_some()
}

/// Strip a single leading `?` from a query string
pub fn strip_query_prefix(query: &str) -> &str {
    query.strip_prefix('?').unwrap_or(query)
}

/// Split a `name=value` pair on the first `=`.
/// A pair without `=` is a name with an empty value.
pub fn split_pair(pair: &str) -> (&str, &str) {
    memchr::memchr(b'=', pair.as_bytes()).map_or((pair, ""), |pos| {
        (&pair[..pos], &pair[pos + 1..])
    })
}

/// Iterate over the `&`-separated pairs of a query string (without leading `?`)
pub fn query_pairs(query: &str) -> impl Iterator<Item = (&str, &str)> {
    query.split('&').map(split_pair)
}
