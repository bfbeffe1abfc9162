use std::io::{self, BufRead, Write};

use tracing::warn;

use numconv_core::{Convertor, Language};

/// Convert one string, logging any decode diagnostics.
pub fn convert_text(text: &[u8], lang: Language) -> String {
    let convertor = Convertor::new(text, lang);
    for err in convertor.diagnostics() {
        warn!("{err}");
    }
    convertor.into_output()
}

/// Convert `reader` line by line into `writer`. Returns the number of lines.
///
/// Lines are read as raw bytes, so malformed UTF-8 is substituted rather than
/// rejected.
pub fn convert_stream<R: BufRead, W: Write>(
    mut reader: R,
    mut writer: W,
    lang: Language,
) -> io::Result<usize> {
    let mut line = Vec::new();
    let mut count = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            break;
        }
        let newline = line.last() == Some(&b'\n');
        if newline {
            line.pop();
        }
        writer.write_all(convert_text(&line, lang).as_bytes())?;
        if newline {
            writer.write_all(b"\n")?;
        }
        count += 1;
    }
    writer.flush()?;
    Ok(count)
}
