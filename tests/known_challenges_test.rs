//! Conversion of complete challenge pages against hand-written expected output

use challenge_fetcher::content_saver::markdown_converter::{
    ConversionOptions, ResourceManifest, convert_challenge_sync,
};

mod common;
use common::{PROBLEM_1_DESCRIPTION, PROBLEM_1_MARKDOWN, challenge_page};

#[test]
fn test_problem_1_sanity_check() {
    let html = challenge_page("Multiples of 3 or 5", PROBLEM_1_DESCRIPTION);
    let result = convert_challenge_sync(
        &html,
        "https://projecteuler.net/problem=1",
        &ConversionOptions::default(),
    )
    .unwrap();

    assert_eq!(result.title, "Multiples of 3 or 5");
    assert_eq!(result.source_url, "https://projecteuler.net/problem=1");
    assert_eq!(result.markdown_body, PROBLEM_1_MARKDOWN);
    assert_eq!(result.resources, None);
}

#[test]
fn test_page_chrome_outside_description_is_ignored() {
    // The print icon above the title would be an unknown link if it were converted
    let html = challenge_page("Plain", "<p>Text.</p>");
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();
    assert_eq!(result.markdown_body, "Text.");
}

#[test]
fn test_challenge_with_resources() {
    let description = r#"
<p>A 9 by 9 grid like the one below is a Su Doku puzzle.</p>
<div class="center"><img src="project/images/p096_1.png" alt="p096_1.png"> <img src="project/images/p096_2.png" alt="p096_2.png"></div>
<p>The 6K text file, <a href="project/resources/p096_sudoku.txt">sudoku.txt</a> (right click and 'Save Link/Target As...'), contains fifty puzzles.</p>
"#;
    let html = challenge_page("Su Doku", description);
    let result = convert_challenge_sync(
        &html,
        "https://projecteuler.net/problem=96",
        &ConversionOptions::default(),
    )
    .unwrap();

    assert_eq!(
        result.markdown_body,
        "A 9 by 9 grid like the one below is a Su Doku puzzle.\n\n\
         ![1.png](./1.png) ![2.png](./2.png)\n\n\
         The 6K text file, [sudoku.txt](./sudoku.txt) (right click and 'Save Link/Target As...'), contains fifty puzzles."
    );

    let mut expected = ResourceManifest::new();
    expected
        .insert("1.png", "https://projecteuler.net/project/images/p096_1.png")
        .unwrap();
    expected
        .insert("2.png", "https://projecteuler.net/project/images/p096_2.png")
        .unwrap();
    expected
        .insert(
            "sudoku.txt",
            "https://projecteuler.net/project/resources/p096_sudoku.txt",
        )
        .unwrap();
    assert_eq!(result.resources, Some(expected));
}

#[test]
fn test_cross_challenge_and_about_links() {
    let description = r#"<p>As in <a href="problem=18">Problem 18</a>, see the <a href="about=divisors">divisors page</a>.</p>"#;
    let html = challenge_page("Maximum Path Sum II", description);
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();

    assert_eq!(
        result.markdown_body,
        "As in [Problem 18](https://projecteuler.net/problem=18), see the [divisors page](https://projecteuler.net/about=divisors)."
    );
    assert_eq!(result.resources, None);
}

#[test]
fn test_links_inside_emphasis() {
    let description = r#"<p>File <b><a href="project/resources/p022_names.txt">names</a></b>, see <i><a href="problem=2">two</a></i>.</p>"#;
    let html = challenge_page("Names Scores", description);
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();

    assert_eq!(
        result.markdown_body,
        "File **[names.txt](./names.txt)**, see *[two](https://projecteuler.net/problem=2)*."
    );
    let manifest = result.resources.unwrap();
    assert_eq!(
        manifest.get("names.txt"),
        Some("https://projecteuler.net/project/resources/p022_names.txt")
    );
}

#[test]
fn test_word_glued_to_color_span() {
    let html = challenge_page("Colours", r#"<p>the <span class="red">x</span>th term</p>"#);
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();
    assert_eq!(result.markdown_body, r"the ${\color{red}{x}}\text{th}$ term");
}

#[test]
fn test_latex_environment_and_brace_escaping() {
    let description = r"<p>Consider</p>
<p>\begin{align}
x &amp;= \{1, 2\}
\end{align}</p>";
    let html = challenge_page("Sets", description);
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();

    assert_eq!(
        result.markdown_body,
        "Consider\n\n$$\n\\begin{align}\nx &= \\\\{1, 2\\\\}\n\\end{align}\n$$"
    );
}

#[test]
fn test_github_workarounds() {
    let description = r"<p>Let $\operatorname{lcm}(a, b) = c$ for all $n$th terms.</p>";
    let html = challenge_page("Workarounds", description);

    let with = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();
    assert_eq!(
        with.markdown_body,
        r"Let $\mathop{\text{lcm}}(a, b) = c$ for all $n\text{th}$ terms."
    );

    let without =
        convert_challenge_sync(&html, "u", &ConversionOptions::without_workarounds()).unwrap();
    assert_eq!(
        without.markdown_body,
        r"Let $\operatorname{lcm}(a, b) = c$ for all $n$th terms."
    );
}

#[test]
fn test_non_breaking_spaces_are_normalized() {
    let html = challenge_page("Spaces", "<p>a&nbsp;b\u{a0}c</p>");
    let result = convert_challenge_sync(&html, "u", &ConversionOptions::default()).unwrap();
    assert_eq!(result.markdown_body, "a b c");
}

#[test]
fn test_conversion_is_deterministic() {
    let description = r#"<p><b>Bold</b>, <span class="red"><i>red</i></span>, <a href="project/resources/p022_names.txt">names</a>, <span class="tooltip">tip<span class="tooltiptext">shown</span></span>.</p>"#;
    let html = challenge_page("Deterministic", description);
    let options = ConversionOptions::default();

    let first = convert_challenge_sync(&html, "u", &options).unwrap();
    for _ in 0..5 {
        assert_eq!(convert_challenge_sync(&html, "u", &options).unwrap(), first);
    }
}
