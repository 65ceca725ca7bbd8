use super::Messages;

pub(super) static ENGLISH: Messages = Messages {
    root_short: "A CLI tool for managing release tags",
    root_long: "rtag is a command line tool for managing release tags with git integration.",
    init_short: "Initialize .rtag file",
    init_long: "Initialize .rtag file for storing published tags.",
    add_short: "Add a new tag",
    add_long: "Add a new tag to the .rtag file. If no tag is provided, interactive mode will be used.",
    push_short: "Push tags to remote repository",
    push_long: "Push tags to remote repository. Use --all flag to push all tags.",
    list_short: "List all tags",
    list_long: "List all tags from the .rtag file.",
    rm_short: "Remove a tag",
    rm_long: "Remove a tag from the .rtag file.",
    lang_short: "Set or display current language",
    lang_long: "Set the interface language or display current language settings.",
    push_all_flag: "Push all tags",

    store_empty_or_missing: ".rtag file is empty or does not exist",
    current_tags: "Current tags:",
    no_tags_found: "No tags found",
    specify_tag_or_use_all: "Please specify a tag to push or use --all flag",
    all_tags: "All tags:",
    enter_tag: "Enter a tag (or 'exit' to quit): ",
    exit: "Exit",
    tag_cannot_be_empty: "Tag cannot be empty, please try again",
    continue_adding: "Continue adding? (y/n): ",
    pushing_tags_to_remote: "Pushing tags to remote repository...",
    push_tags_success: "Successfully pushed all tags",
    current_language: "Current language",
    available_languages: "Available languages",
    language_preference_saved: "Language preference saved successfully.",
    language_change_note: "Note: Language change will take effect on next command execution.",

    error_reading_store: "Error reading .rtag file: {error}",
    add_tag_failed: "Failed to add tag: {error}",
    add_tag_success: "Successfully added tag: {tag}",
    read_tags_failed: "Failed to read tags: {error}",
    tag_not_in_store: "Tag '{tag}' does not exist in .rtag file",
    remove_tag_failed: "Failed to remove tag: {error}",
    remove_tag_success: "Successfully removed tag: {tag}",
    read_input_failed: "Failed to read input: {error}",
    start_pushing_tags: "Starting to push tags (timestamp: {timestamp})...",
    create_git_tag: "Creating git tag: {name}",
    create_tag_failed: "Failed to create tag {name}: {error}",
    push_tags_failed: "Failed to push tags: {error}",
    tag_already_exists: "tag '{tag}' already exists",
    tag_not_exist: "tag '{tag}' does not exist",
    language_usage: "Usage: rtag lang [{codes}]",
    environment_variable: "Environment variable: RTAG_LANG=[{codes}]",
    config_file: "Config file: {path}",
    language_set_to: "Language set to {name}",
    invalid_language: "Invalid language '{value}'. Supported languages: {codes}",
};
