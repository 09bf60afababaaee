// Modules pulled into host tests with `include!` cannot carry inner doc
// comments, so their headers must stay plain `//` comments.

const INCLUDED: [(&str, &str); 10] = [
    ("constants.rs", include_str!("../src/constants.rs")),
    ("motion.rs", include_str!("../src/motion.rs")),
    ("geometry.rs", include_str!("../src/geometry.rs")),
    ("scene.rs", include_str!("../src/scene.rs")),
    ("background.rs", include_str!("../src/background.rs")),
    ("hero.rs", include_str!("../src/hero.rs")),
    ("audio.rs", include_str!("../src/audio.rs")),
    ("lifecycle.rs", include_str!("../src/lifecycle.rs")),
    ("page/constants.rs", include_str!("../src/page/constants.rs")),
    ("page/logic.rs", include_str!("../src/page/logic.rs")),
];

#[test]
fn included_modules_have_no_inner_doc_comments() {
    for (name, source) in INCLUDED {
        let inner = source
            .lines()
            .position(|l| l.trim_start().starts_with("//!") || l.trim_start().starts_with("/*!"));
        assert_eq!(inner, None, "{} has an inner doc comment", name);
    }
}
