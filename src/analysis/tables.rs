//! Default normalization tables.
//!
//! The corpus this classifier was built for mixes Indonesian and English,
//! so the defaults carry an English contraction table, an Indonesian
//! slang-to-canonical map, and a merged Indonesian + English stopword set.
//! All three are plain data; the [`Normalizer`](super::Normalizer) takes
//! them by value so callers can swap in their own tables.

use std::collections::HashSet;
use std::sync::LazyLock;

/// English contractions, expanded before any punctuation stripping.
///
/// The table is applied in declared order. Order is significant: earlier
/// replacements can create substrings matched by later entries (for
/// example `won't` must be handled before the generic `n't`), so this
/// slice must not be reordered.
pub const DEFAULT_CONTRACTIONS: &[(&str, &str)] = &[
    ("won't", "will not"),
    ("can't", "cannot"),
    ("n't", " not"),
    ("'re", " are"),
    ("'s", " is"),
    ("'d", " would"),
    ("'ll", " will"),
    ("'t", " not"),
    ("'ve", " have"),
    ("'m", " am"),
];

/// Indonesian slang and abbreviations mapped to canonical forms.
pub const DEFAULT_SLANG: &[(&str, &str)] = &[
    ("gk", "tidak"),
    ("ga", "tidak"),
    ("gak", "tidak"),
    ("nggak", "tidak"),
    ("ndak", "tidak"),
    ("g", "tidak"),
    ("tak", "tidak"),
    ("tdk", "tidak"),
    ("gw", "saya"),
    ("gue", "saya"),
    ("sy", "saya"),
    ("aku", "saya"),
    ("lu", "kamu"),
    ("lo", "kamu"),
    ("agan", "kamu"),
    ("gan", "kamu"),
    ("yg", "yang"),
    ("dgn", "dengan"),
    ("utk", "untuk"),
    ("sdh", "sudah"),
    ("udh", "sudah"),
    ("blm", "belum"),
    ("bgt", "banget"),
    ("krn", "karena"),
    ("karna", "karena"),
    ("tp", "tapi"),
    ("tpi", "tapi"),
    ("jg", "juga"),
    ("bgs", "bagus"),
    ("mks", "terimakasih"),
    ("thx", "terimakasih"),
    ("bs", "bisa"),
    ("aj", "saja"),
    ("aja", "saja"),
];

/// Default English stop words list.
const DEFAULT_ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "the", "and", "or", "but", "if", "while", "of", "on", "in", "to", "for", "with",
    "is", "are", "was", "were", "be", "been", "being", "at", "by", "from", "as", "that", "this",
    "it", "its", "i", "you", "he", "she", "they", "them", "we", "us", "our", "your", "their",
    "my", "me", "him", "her", "what", "which", "who", "whom", "how", "why", "when", "where",
];

/// Default Indonesian stop words list (conjunctions, pronouns, particles).
const DEFAULT_INDONESIAN_STOP_WORDS: &[&str] = &[
    "yang",
    "dan",
    "di",
    "ke",
    "dari",
    "ini",
    "itu",
    "untuk",
    "pada",
    "adalah",
    "sebagai",
    "dengan",
    "juga",
    "oleh",
    "karena",
    "bisa",
    "akan",
    "atau",
    "seperti",
    "jika",
    "kalau",
    "agar",
    "supaya",
    "bagi",
    "kepada",
    "tentang",
    "maka",
    "namun",
    "tapi",
    "tetapi",
    "melainkan",
    "padahal",
    "sedangkan",
    "sementara",
    "ketika",
    "setelah",
    "sesudah",
    "sebelum",
    "sejak",
    "hingga",
    "sampai",
    "serta",
    "tanpa",
    "melalui",
    "menurut",
    "antara",
    "selama",
    "sekitar",
    "saya",
    "aku",
    "ku",
    "mu",
    "nya",
    "kita",
    "kami",
    "anda",
    "kalian",
    "mereka",
    "dia",
    "ia",
    "beliau",
    "sini",
    "sana",
    "situ",
    "apa",
    "siapa",
    "kapan",
    "dimana",
    "mengapa",
    "bagaimana",
    "berapa",
    "ada",
    "yaitu",
    "yakni",
    "merupakan",
    "menjadi",
    "sudah",
    "telah",
    "sedang",
    "masih",
    "baru",
    "pernah",
    "ingin",
    "mau",
    "harus",
    "pasti",
    "tentu",
    "mungkin",
    "boleh",
    "dapat",
    "banyak",
    "sedikit",
    "lebih",
    "kurang",
    "paling",
    "cukup",
    "terlalu",
    "sangat",
    "sekali",
    "hanya",
    "cuma",
    "saja",
    "lagi",
    "pun",
    "sih",
    "deh",
    "dong",
    "kok",
    "mah",
    "kan",
];

/// Merged Indonesian + English stop word set.
pub static DEFAULT_STOP_WORDS_SET: LazyLock<HashSet<String>> = LazyLock::new(|| {
    DEFAULT_ENGLISH_STOP_WORDS
        .iter()
        .chain(DEFAULT_INDONESIAN_STOP_WORDS.iter())
        .map(|&s| s.to_string())
        .collect()
});
