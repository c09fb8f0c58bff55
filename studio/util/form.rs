/// Decodes a percent-encoded string (`%XX`) and converts `+` to space.
/// Multi-byte UTF-8 sequences are reassembled; invalid bytes become U+FFFD.
pub fn url_decode(s: &str) -> String {
    let bytes = s.as_bytes();
    let mut out: Vec<u8> = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                out.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => {
                let hi = (bytes[i + 1] as char).to_digit(16);
                let lo = (bytes[i + 2] as char).to_digit(16);
                match (hi, lo) {
                    (Some(h), Some(l)) => {
                        out.push(((h << 4) | l) as u8);
                        i += 3;
                    }
                    _ => {
                        out.push(b'%');
                        i += 1;
                    }
                }
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Parses `key=value&key2=value2` into a `Vec` of `(key, value)` pairs.
pub fn parse_form(body: &str) -> Vec<(String, String)> {
    body.split('&')
        .filter(|pair| !pair.is_empty())
        .filter_map(|pair| {
            let mut it = pair.splitn(2, '=');
            let k = it.next()?.to_owned();
            let v = it.next().unwrap_or("").to_owned();
            Some((url_decode(&k), url_decode(&v)))
        })
        .collect()
}

/// Looks up a key in parsed form pairs, returning the value if found.
pub fn form_get<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_commas_spaces_and_utf8() {
        assert_eq!(url_decode("K4%2CL4"), "K4,L4");
        assert_eq!(url_decode("Dr+A%C3%A9"), "Dr Aé");
        assert_eq!(url_decode("100%"), "100%");
    }

    #[test]
    fn parses_pairs_in_order() {
        let pairs = parse_form("days=Monday%2CTuesday&end_time=&action=add_lab");
        assert_eq!(form_get(&pairs, "days"), Some("Monday,Tuesday"));
        assert_eq!(form_get(&pairs, "end_time"), Some(""));
        assert_eq!(form_get(&pairs, "start_time"), None);
    }
}
