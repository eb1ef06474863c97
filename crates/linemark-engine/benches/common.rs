// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_document(size: usize) -> String {
    let base = concat!(
        "# Title\n\nSection\n=======\n\n",
        "> Quoted with a [link](example.com) and *emphasis*.\n> Second quote line.\n\n",
        "- Item one\n- Item **two**\nx Done item\n\n",
        "name   : linemark\nsite   : www.example.com\n\n",
        "=== rust\nfn example() {\n    println!(\"Hello\");\n}\n===\n\n",
        "Plain line with http://example.com/path, ![logo](logo.png#20x20) and _words_.\n***\n",
    );
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_inline_heavy(lines: usize) -> String {
    let mut content = String::new();
    for i in 0..lines {
        content.push_str(&format!("Line {i} with [a link](site{i}.com), <http://a{i}.io>, "));
        content.push_str(&format!("**bold**, __strong__, www.host{i}.org and "));
        content.push_str(&format!("[![img](i{i}.png)](u{i}.io)\n"));
    }
    content
}
