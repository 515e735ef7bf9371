// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_model_reply(sections: usize) -> String {
    let base = "## Step\n\nRun **this** then *that*, see [docs](https://e.com/docs).\n\n- first `item`\n- second item\n> quoted hint\n|Plan|Credits|\n```python\ndef main():\n    print(\"hi\")\n```\n\n";
    base.repeat(sections)
}

#[allow(dead_code)]
pub fn generate_long_line(words: usize) -> String {
    let mut line = String::new();
    for i in 0..words {
        match i % 4 {
            0 => line.push_str("**bold** "),
            1 => line.push_str("*italic* "),
            2 => line.push_str("`code` "),
            _ => line.push_str("[link](https://e.com) "),
        }
    }
    line
}
