use super::Messages;

pub(super) static CHINESE: Messages = Messages {
    root_short: "发布标签管理工具",
    root_long: "rtag 是一个用于管理发布标签并集成 git 的命令行工具。",
    init_short: "初始化 .rtag 文件",
    init_long: ".rtag 文件用于存储已发布的 tag。",
    add_short: "添加新标签",
    add_long: "向 .rtag 文件添加新标签。如果未提供标签，将使用交互模式。",
    push_short: "推送标签到远程仓库",
    push_long: "推送标签到远程仓库。使用 --all 标志推送所有标签。",
    list_short: "列出所有标签",
    list_long: "列出 .rtag 文件中的所有标签。",
    rm_short: "删除标签",
    rm_long: "从 .rtag 文件中删除标签。",
    lang_short: "设置或显示当前语言",
    lang_long: "设置界面语言或显示当前语言设置。",
    push_all_flag: "推送所有标签",

    store_empty_or_missing: ".rtag 文件为空或不存在",
    current_tags: "当前 tags:",
    no_tags_found: "没有找到任何 tags",
    specify_tag_or_use_all: "请指定要推送的 tag 或使用 --all 标志",
    all_tags: "所有 tags:",
    enter_tag: "请输入一个 tag (或输入 'exit' 退出): ",
    exit: "退出",
    tag_cannot_be_empty: "Tag 不能为空，请重新输入",
    continue_adding: "是否继续添加? (y/n): ",
    pushing_tags_to_remote: "推送 tags 到远程仓库...",
    push_tags_success: "成功推送所有 tags",
    current_language: "当前语言",
    available_languages: "可用语言",
    language_preference_saved: "语言偏好保存成功。",
    language_change_note: "注意: 语言更改将在下次命令执行时生效。",

    error_reading_store: "错误读取 .rtag 文件: {error}",
    add_tag_failed: "添加 tag 失败: {error}",
    add_tag_success: "成功添加 tag: {tag}",
    read_tags_failed: "读取 tags 失败: {error}",
    tag_not_in_store: "Tag '{tag}' 不存在于 .rtag 文件中",
    remove_tag_failed: "删除 tag 失败: {error}",
    remove_tag_success: "成功删除 tag: {tag}",
    read_input_failed: "读取输入失败: {error}",
    start_pushing_tags: "开始推送 tags (时间戳: {timestamp})...",
    create_git_tag: "创建 git tag: {name}",
    create_tag_failed: "创建 tag {name} 失败: {error}",
    push_tags_failed: "推送 tags 失败: {error}",
    tag_already_exists: "tag '{tag}' 已存在",
    tag_not_exist: "tag '{tag}' 不存在",
    language_usage: "用法: rtag lang [{codes}]",
    environment_variable: "环境变量: RTAG_LANG=[{codes}]",
    config_file: "配置文件: {path}",
    language_set_to: "语言已设置为{name}",
    invalid_language: "无效语言 '{value}'。支持的语言: {codes}",
};
