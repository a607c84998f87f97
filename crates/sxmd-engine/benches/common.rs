// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_xmd_content(size: usize) -> String {
    let base = "# Title\n\nParagraph citing \\cite[p. 1]{knuth} with $x^2$ inline.\n\n\\begin{align}\n  a &= b \\\\\n  \\begin{cases}1\\end{cases}\n\\end{align}\n\nSee Fig.~\\ref{f} and •\\sum_i x_i•.\n<!-- \\hidden{already} -->\n<![CDATA[dropped]]>\n";
    base.repeat(size)
}

#[allow(dead_code)]
pub fn generate_prose(size: usize) -> String {
    "Plain prose without any macros, math or markers at all. ".repeat(size)
}

#[allow(dead_code)]
pub fn fixture_contents() -> Vec<String> {
    let pattern = format!("{}/tests/fixtures/*.xmd", env!("CARGO_MANIFEST_DIR"));
    glob::glob(&pattern)
        .map(|paths| {
            paths
                .filter_map(Result::ok)
                .filter_map(|path| std::fs::read_to_string(path).ok())
                .collect()
        })
        .unwrap_or_default()
}
