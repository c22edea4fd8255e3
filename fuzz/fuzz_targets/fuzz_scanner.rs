#![no_main]
use std::cell::RefCell;

use arbitrary::Arbitrary;
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, RngCore, SeedableRng};
use texprose::{Dialect, ScanConfig, Scanner};

const HEADER: usize = 1; // flags

thread_local! {
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Tokens that steer the scanner into its less travelled branches.
static TOKEN_TABLE: &[&str] = &[
    "\\begin{",
    "\\end{",
    "equation}",
    "verbatim}",
    "tikzpicture}",
    "\\[",
    "\\]",
    "$",
    "$$",
    "{",
    "}",
    "[",
    "]",
    "(",
    ")",
    "%",
    "\n\n",
    "\\\\",
    "\\",
    "\\verb|",
    "\\verb*",
    "\\text{",
    "\\section*[",
    "\\cite{",
    "\\cites()()[][]{",
    "\\footnote{",
    "\\hspace{",
    "\\\"",
    "{\\'",
    "\\c ",
    "\\i",
    "\\starttyping",
    "\\stoptyping",
    "\\startformula",
    "<<",
    ">>=",
    "@",
    "``",
    "\"`",
    "---",
    "~",
    "&",
    "12pt}",
    "-1.5ex]",
    "\u{00E4}",
    "\u{1F600}",
];

fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    if size < HEADER || seed.is_multiple_of(10) {
        data[0] = with_rng(|rng| rng.next_u32() as u8 & 0x07);

        let mut prefix = HEADER;
        while prefix < size.max(HEADER + 1) && prefix < max_size {
            prefix += append_tokens(&mut data[prefix..], max_size - prefix);
        }
        prefix
    } else {
        fuzzer_mutate(data, size, max_size)
    }
}

/// Append a run of table tokens and arbitrary text to `buf`, never exceeding
/// `limit`. Returns the number of bytes written.
fn append_tokens(buf: &mut [u8], limit: usize) -> usize {
    let bytes: Vec<u8> = with_rng(|rng| (0..64).map(|_| rng.random::<u8>()).collect());
    let Ok(soup) = TokenSoup::arbitrary(&mut arbitrary::Unstructured::new(&bytes)) else {
        return limit.min(1);
    };
    let len = soup.0.len().min(limit);
    buf[..len].copy_from_slice(&soup.0.as_bytes()[..len]);
    len.max(limit.min(1))
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug)]
struct TokenSoup(String);

impl<'a> Arbitrary<'a> for TokenSoup {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut out = String::new();
        for _ in 0..u.choose_index(16)? + 1 {
            if u.ratio(1, 4)? {
                let text: &str = u.arbitrary()?;
                out.push_str(text);
            } else {
                out.push_str(u.choose(TOKEN_TABLE)?);
            }
        }
        Ok(TokenSoup(out))
    }
}

fn scanner(data: &[u8]) {
    if data.len() <= HEADER {
        return;
    }

    let flags = data[0];
    let source = String::from_utf8_lossy(&data[HEADER..]).into_owned();

    let scanner = Scanner::new(&ScanConfig {
        language: if flags & 1 != 0 { "fr".into() } else { "en-US".into() },
        dialect: if flags & 2 != 0 {
            Dialect::Rsweave
        } else {
            Dialect::Latex
        },
        strict: flags & 4 != 0,
        ..ScanConfig::default()
    });

    // A strict scan may stall; a lenient one must always finish.
    let Ok(text) = scanner.scan(source.as_str()) else {
        assert!(flags & 4 != 0, "lenient scan failed");
        return;
    };
    if let Err(violation) = text.check_consistency(&source) {
        panic!("{violation}");
    }

    let inverse = text.invert();
    for plain in 0..=text.plain_text().len() {
        assert!(inverse.plain_offset(text.source_offset(plain)) <= plain);
    }
    for offset in 0..=source.len() {
        assert!(text.source_offset(inverse.plain_offset(offset)) <= offset);
    }
}

fuzz_target!(|data: &[u8]| scanner(data));
