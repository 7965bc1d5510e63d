use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Bytes escaped when a playlist URL is placed inside the widget's `url=` query
/// parameter: everything except the RFC 3986 unreserved set and `/`.
///
/// Reserved characters (`:?#[]@!$&'()*+,;=`), `%`, whitespace and every
/// non-ASCII byte come out as uppercase `%XX`.
pub const PLAYLIST_URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~')
    .remove(b'/');

/// Percent-encode a playlist address for embedding in the player iframe `src`.
///
/// `https://soundcloud.com/a/sets/b` becomes `https%3A//soundcloud.com/a/sets/b`.
pub fn encode_playlist_url(url: &str) -> String {
    utf8_percent_encode(url, PLAYLIST_URL_ENCODE_SET).to_string()
}
