// SPDX-License-Identifier: MPL-2.0
use iced_gallery::app::{self, Flags};
use iced_gallery::config::ApiKey;
use iced_gallery::logging;
use std::ffi::OsString;

const HELP: &str = "\
Usage: iced_gallery [OPTIONS] [QUERY]

Options:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --api-key <KEY>         Pexels API key (overrides ICED_GALLERY_API_KEY)
  --config-dir <PATH>     Directory holding settings.toml
  --download-dir <PATH>   Directory where photos are saved
  -h, --help              Print this help
";

fn main() -> iced::Result {
    let mut args = pico_args::Arguments::from_env();

    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    logging::init();

    let lang = optional_value(&mut args, "--lang");
    let api_key = optional_value(&mut args, "--api-key");
    let config_dir = optional_value(&mut args, "--config-dir");
    let download_dir = optional_value(&mut args, "--download-dir");

    let query = query_from_args(args.finish());

    let flags = Flags {
        lang,
        query,
        api_key: ApiKey::resolve(api_key),
        config_dir,
        download_dir,
    };

    tracing::info!(query = ?flags.query, "starting");
    app::run(flags)
}

fn optional_value(args: &mut pico_args::Arguments, key: &'static str) -> Option<String> {
    match args.opt_value_from_str(key) {
        Ok(value) => value,
        Err(error) => {
            tracing::warn!(%error, option = key, "ignoring invalid option");
            None
        }
    }
}

/// Joins the positional words into the startup query. Unknown flags are
/// reported and left out.
fn query_from_args(remaining: Vec<OsString>) -> Option<String> {
    let mut words = Vec::new();
    for arg in remaining {
        match arg.into_string() {
            Ok(word) if word.starts_with('-') => {
                tracing::warn!(option = %word, "ignoring unknown option");
            }
            Ok(word) => words.push(word),
            Err(raw) => tracing::warn!(argument = ?raw, "ignoring non UTF-8 argument"),
        }
    }
    (!words.is_empty()).then(|| words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn positional_words_form_the_query() {
        assert_eq!(
            query_from_args(args(&["snowy", "mountains"])).as_deref(),
            Some("snowy mountains")
        );
    }

    #[test]
    fn unknown_flags_are_left_out_of_the_query() {
        assert_eq!(
            query_from_args(args(&["--verbose", "lake", "-x"])).as_deref(),
            Some("lake")
        );
    }

    #[test]
    fn only_flags_means_no_query() {
        assert_eq!(query_from_args(args(&["--verbose"])), None);
        assert_eq!(query_from_args(Vec::new()), None);
    }
}
