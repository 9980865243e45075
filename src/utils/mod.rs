pub mod constants;
pub mod url_utils;

pub use constants::*;
pub use url_utils::{
    challenge_dir, challenge_folder_name, challenge_url, is_valid_url, with_trailing_slash,
};
