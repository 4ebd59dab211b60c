use ferrous_splitdns_domain::{ConvertedFile, ResolverSet};

fn resolvers(addrs: &[&str]) -> ResolverSet {
    ResolverSet::new(addrs.iter().map(|s| s.to_string()).collect()).unwrap()
}

#[test]
fn test_render_header_and_directives() {
    let raw = "# generated list\nfull:apple.com\n\nregexp:^cdn\\.\nicloud.com\n";

    let file = ConvertedFile::render("apple-cn.txt", &resolvers(&["114.114.114.114"]), raw.lines());

    assert_eq!(
        file.content,
        "# DNS servers: 114.114.114.114\n\
         # Source file: apple-cn.txt\n\
         \n\
         [/apple.com/]114.114.114.114\n\
         [/icloud.com/]114.114.114.114\n"
    );
    assert_eq!(file.directives, 2);
}

#[test]
fn test_render_empty_source_keeps_header() {
    let file = ConvertedFile::render("gfw.txt", &resolvers(&["8.8.8.8", "1.1.1.1"]), "".lines());

    assert_eq!(file.content, "# DNS servers: 8.8.8.8 1.1.1.1\n# Source file: gfw.txt\n\n");
    assert_eq!(file.directives, 0);
}

#[test]
fn test_render_preserves_line_order() {
    let raw = "c.com\na.com\nb.com";
    let file = ConvertedFile::render("x.txt", &resolvers(&["1.1.1.1"]), raw.lines());

    let body: Vec<&str> = file.content.lines().skip(3).collect();
    assert_eq!(
        body,
        vec!["[/c.com/]1.1.1.1", "[/a.com/]1.1.1.1", "[/b.com/]1.1.1.1"]
    );
}

#[test]
fn test_render_is_idempotent() {
    let raw = "full:a.com\nb.com\n# c\n";
    let set = resolvers(&["1.1.1.1"]);

    let first = ConvertedFile::render("x.txt", &set, raw.lines());
    let second = ConvertedFile::render("x.txt", &set, raw.lines());

    assert_eq!(first, second);
}

#[test]
fn test_render_handles_crlf_input() {
    let raw = "full:a.com\r\nb.com\r\n";
    let file = ConvertedFile::render("x.txt", &resolvers(&["1.1.1.1"]), raw.lines());

    assert!(file.content.ends_with("[/a.com/]1.1.1.1\n[/b.com/]1.1.1.1\n"));
}
