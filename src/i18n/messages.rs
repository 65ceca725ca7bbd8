//! Message tables for user-facing output.
//!
//! Fixed strings are public fields. Strings with arguments are templates with
//! named placeholders (`{tag}`, `{error}`, ...) exposed through methods.

/// All translatable strings for one language
#[derive(Debug)]
pub struct Messages {
    /// One-line description of the tool
    pub root_short: &'static str,
    /// Long description of the tool
    pub root_long: &'static str,
    /// `init` one-line help
    pub init_short: &'static str,
    /// `init` long help
    pub init_long: &'static str,
    /// `add` one-line help
    pub add_short: &'static str,
    /// `add` long help
    pub add_long: &'static str,
    /// `push` one-line help
    pub push_short: &'static str,
    /// `push` long help
    pub push_long: &'static str,
    /// `list` one-line help
    pub list_short: &'static str,
    /// `list` long help
    pub list_long: &'static str,
    /// `rm` one-line help
    pub rm_short: &'static str,
    /// `rm` long help
    pub rm_long: &'static str,
    /// `lang` one-line help
    pub lang_short: &'static str,
    /// `lang` long help
    pub lang_long: &'static str,
    /// `push --all` help
    pub push_all_flag: &'static str,

    /// Shown by `init` when there is nothing stored
    pub store_empty_or_missing: &'static str,
    /// Header for the tag list printed by `init`
    pub current_tags: &'static str,
    /// The store has no tags
    pub no_tags_found: &'static str,
    /// `push` without target
    pub specify_tag_or_use_all: &'static str,
    /// Header for the tag list printed by `list`
    pub all_tags: &'static str,
    /// Interactive prompt for a tag
    pub enter_tag: &'static str,
    /// Printed when the interactive loop ends
    pub exit: &'static str,
    /// Interactive input was blank
    pub tag_cannot_be_empty: &'static str,
    /// Interactive continue prompt
    pub continue_adding: &'static str,
    /// Before `git push`
    pub pushing_tags_to_remote: &'static str,
    /// After a successful `git push`
    pub push_tags_success: &'static str,
    /// Label for the active language
    pub current_language: &'static str,
    /// Header for the language list
    pub available_languages: &'static str,
    /// After the preference file was written
    pub language_preference_saved: &'static str,
    /// Reminder that help text follows the language on the next run
    pub language_change_note: &'static str,

    pub(super) error_reading_store: &'static str,
    pub(super) add_tag_failed: &'static str,
    pub(super) add_tag_success: &'static str,
    pub(super) read_tags_failed: &'static str,
    pub(super) tag_not_in_store: &'static str,
    pub(super) remove_tag_failed: &'static str,
    pub(super) remove_tag_success: &'static str,
    pub(super) read_input_failed: &'static str,
    pub(super) start_pushing_tags: &'static str,
    pub(super) create_git_tag: &'static str,
    pub(super) create_tag_failed: &'static str,
    pub(super) push_tags_failed: &'static str,
    pub(super) tag_already_exists: &'static str,
    pub(super) tag_not_exist: &'static str,
    pub(super) language_usage: &'static str,
    pub(super) environment_variable: &'static str,
    pub(super) config_file: &'static str,
    pub(super) language_set_to: &'static str,
    pub(super) invalid_language: &'static str,
}

/// Replace each `{name}` placeholder in `template` in one left-to-right
/// pass. Substituted values are never scanned again.
fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let placeholder = &rest[start..];

        let substitution = placeholder.find('}').and_then(|end| {
            let name = &placeholder[1..end];
            args.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (end, *value))
        });

        match substitution {
            Some((end, value)) => {
                out.push_str(value);
                rest = &placeholder[end + 1..];
            }
            None => {
                out.push('{');
                rest = &placeholder[1..];
            }
        }
    }

    out.push_str(rest);
    out
}

impl Messages {
    /// The store file could not be read by `init`
    pub fn error_reading_store(&self, error: &str) -> String {
        fill(self.error_reading_store, &[("error", error)])
    }

    /// `add` failed
    pub fn add_tag_failed(&self, error: &str) -> String {
        fill(self.add_tag_failed, &[("error", error)])
    }

    /// `add` succeeded
    pub fn add_tag_success(&self, tag: &str) -> String {
        fill(self.add_tag_success, &[("tag", tag)])
    }

    /// The store file could not be read
    pub fn read_tags_failed(&self, error: &str) -> String {
        fill(self.read_tags_failed, &[("error", error)])
    }

    /// The push target was never added
    pub fn tag_not_in_store(&self, tag: &str) -> String {
        fill(self.tag_not_in_store, &[("tag", tag)])
    }

    /// `rm` failed
    pub fn remove_tag_failed(&self, error: &str) -> String {
        fill(self.remove_tag_failed, &[("error", error)])
    }

    /// `rm` succeeded
    pub fn remove_tag_success(&self, tag: &str) -> String {
        fill(self.remove_tag_success, &[("tag", tag)])
    }

    /// Reading interactive input failed
    pub fn read_input_failed(&self, error: &str) -> String {
        fill(self.read_input_failed, &[("error", error)])
    }

    /// Start of a push, with the shared timestamp
    pub fn start_pushing_tags(&self, timestamp: &str) -> String {
        fill(self.start_pushing_tags, &[("timestamp", timestamp)])
    }

    /// Before each `git tag`
    pub fn create_git_tag(&self, name: &str) -> String {
        fill(self.create_git_tag, &[("name", name)])
    }

    /// A `git tag` failed
    pub fn create_tag_failed(&self, name: &str, error: &str) -> String {
        fill(self.create_tag_failed, &[("name", name), ("error", error)])
    }

    /// The final `git push` failed
    pub fn push_tags_failed(&self, error: &str) -> String {
        fill(self.push_tags_failed, &[("error", error)])
    }

    /// Duplicate add
    pub fn tag_already_exists(&self, tag: &str) -> String {
        fill(self.tag_already_exists, &[("tag", tag)])
    }

    /// Removing a tag that is not stored
    pub fn tag_not_exist(&self, tag: &str) -> String {
        fill(self.tag_not_exist, &[("tag", tag)])
    }

    /// `lang` usage line
    pub fn language_usage(&self, codes: &str) -> String {
        fill(self.language_usage, &[("codes", codes)])
    }

    /// `lang` environment variable hint
    pub fn environment_variable(&self, codes: &str) -> String {
        fill(self.environment_variable, &[("codes", codes)])
    }

    /// `lang` preference file hint
    pub fn config_file(&self, path: &str) -> String {
        fill(self.config_file, &[("path", path)])
    }

    /// Confirmation after `lang <language>`
    pub fn language_set_to(&self, name: &str) -> String {
        fill(self.language_set_to, &[("name", name)])
    }

    /// `lang` with an unsupported value
    pub fn invalid_language(&self, value: &str, codes: &str) -> String {
        fill(self.invalid_language, &[("value", value), ("codes", codes)])
    }
}
