use percent_encoding::percent_decode_str;
use scembed::embed::encode::encode_playlist_url;

#[test]
fn test_colon_encoded_slashes_kept() {
    assert_eq!(
        encode_playlist_url("https://soundcloud.com/buzzing-playlists/sets/buzzing-r-b"),
        "https%3A//soundcloud.com/buzzing-playlists/sets/buzzing-r-b"
    );
}

#[test]
fn test_unreserved_characters_untouched() {
    let unreserved = "ABCXYZabcxyz0189-_.~";
    assert_eq!(encode_playlist_url(unreserved), unreserved);
}

#[test]
fn test_reserved_characters_escaped() {
    assert_eq!(
        encode_playlist_url(":?#[]@!$&'()*+,;="),
        "%3A%3F%23%5B%5D%40%21%24%26%27%28%29%2A%2B%2C%3B%3D"
    );
}

#[test]
fn test_space_and_percent_escaped() {
    assert_eq!(encode_playlist_url("a b%c"), "a%20b%25c");
}

#[test]
fn test_non_ascii_escaped_as_utf8_bytes() {
    assert_eq!(
        encode_playlist_url("https://soundcloud.com/dj/sets/mañana"),
        "https%3A//soundcloud.com/dj/sets/ma%C3%B1ana"
    );
}

#[test]
fn test_decoding_restores_original() {
    let originals = [
        "https://soundcloud.com/buzzing-playlists/sets/buzzing-r-b",
        "https://soundcloud.com/user/sets/list?si=abc123&utm_source=clipboard#t=0:30",
        "https://soundcloud.com/dj/sets/mañana 100%",
    ];
    for original in originals {
        let encoded = encode_playlist_url(original);
        let decoded = percent_decode_str(&encoded).decode_utf8().unwrap();
        assert_eq!(decoded, original, "round trip failed for {original}");
    }
}
