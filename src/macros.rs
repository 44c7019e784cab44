#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rewrite {
    ($canonical:literal => $pat:literal) => {
        $crate::Rewrite { canonical: $canonical, pattern: $crate::regex!($pat), keep: None }
    };
    ($canonical:literal => $pat:literal, keep: $keep:expr) => {
        $crate::Rewrite { canonical: $canonical, pattern: $crate::regex!($pat), keep: Some($keep as $crate::Guard) }
    };
}

#[macro_export]
macro_rules! category {
    ($label:literal => $pat:literal) => {
        $crate::Category { label: $label, pattern: $crate::regex!($pat) }
    };
}
