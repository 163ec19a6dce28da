use keyword_search_core::{split_comma_list, KeywordSource, SearchConfig};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Asks for the settings in the order the tool has always asked for them.
pub fn interactive_config() -> io::Result<SearchConfig> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    read_config(&mut stdin.lock(), &mut stdout.lock())
}

fn read_config<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<SearchConfig> {
    let directory = ask(input, out, "Enter the directory path: ")?;
    let extension = ask(input, out, "Enter the file extension (e.g., .txt, .pdf, .docx): ")?;
    let keywords_file = ask(
        input,
        out,
        "Enter the path to the keywords file (leave blank to enter keywords manually): ",
    )?;
    let names = ask(input, out, "Enter names separated by commas (leave blank if none): ")?;

    let keywords = if keywords_file.is_empty() {
        let list = ask(
            input,
            out,
            "Enter keywords separated by commas (leave blank if none): ",
        )?;
        KeywordSource::Inline(split_comma_list(&list))
    } else {
        KeywordSource::File(PathBuf::from(keywords_file))
    };

    Ok(SearchConfig::new(directory, extension)
        .with_keywords(keywords)
        .with_names(split_comma_list(&names)))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> io::Result<String> {
    write!(out, "{question}")?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_string())
}
