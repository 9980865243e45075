//! Location of the structural anchors on a challenge page.
//!
//! Challenge pages keep everything of interest inside `<div id="content">`:
//! the title is its `<h2>` and the statement is `<div class="problem_content">`.

pub mod main_content_extraction;

pub use main_content_extraction::{
    CONTENT_SELECTOR, ChallengeStructure, DESCRIPTION_SELECTOR, TITLE_SELECTOR,
    extract_challenge_structure,
};
