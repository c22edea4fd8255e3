mod scenarios;

use crate::{AnnotatedText, ScanConfig, Scanner};

pub(crate) fn scan_with(config: &ScanConfig, source: &str) -> AnnotatedText {
    let text = Scanner::new(config)
        .scan(source)
        .unwrap_or_else(|e| panic!("scan failed on {source:?}: {e}"));
    if let Err(violation) = text.check_consistency(source) {
        panic!("inconsistent annotated text for {source:?}: {violation}");
    }
    text
}

pub(crate) fn scan(source: &str) -> AnnotatedText {
    scan_with(&ScanConfig::default(), source)
}

pub(crate) fn plain(source: &str) -> String {
    scan(source).plain_text().to_owned()
}
