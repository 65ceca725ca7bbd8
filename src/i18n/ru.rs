use super::Messages;

pub(super) static RUSSIAN: Messages = Messages {
    root_short: "CLI инструмент для управления тегами релизов",
    root_long: "rtag - это инструмент командной строки для управления тегами релизов с интеграцией git.",
    init_short: "Инициализировать файл .rtag",
    init_long: "Инициализировать файл .rtag для хранения опубликованных тегов.",
    add_short: "Добавить новый тег",
    add_long: "Добавить новый тег в файл .rtag. Если тег не указан, будет использован интерактивный режим.",
    push_short: "Отправить теги в удаленный репозиторий",
    push_long: "Отправить теги в удаленный репозиторий. Используйте флаг --all для отправки всех тегов.",
    list_short: "Показать все теги",
    list_long: "Показать все теги из файла .rtag.",
    rm_short: "Удалить тег",
    rm_long: "Удалить тег из файла .rtag.",
    lang_short: "Установить или показать текущий язык",
    lang_long: "Установить язык интерфейса или показать текущие настройки языка.",
    push_all_flag: "Отправить все теги",

    store_empty_or_missing: "Файл .rtag пуст или не существует",
    current_tags: "Текущие теги:",
    no_tags_found: "Теги не найдены",
    specify_tag_or_use_all: "Пожалуйста, укажите тег для отправки или используйте флаг --all",
    all_tags: "Все теги:",
    enter_tag: "Введите тег (или 'exit' для выхода): ",
    exit: "Выход",
    tag_cannot_be_empty: "Тег не может быть пустым, попробуйте снова",
    continue_adding: "Продолжить добавление? (y/n): ",
    pushing_tags_to_remote: "Отправка тегов в удаленный репозиторий...",
    push_tags_success: "Все теги успешно отправлены",
    current_language: "Текущий язык",
    available_languages: "Доступные языки",
    language_preference_saved: "Языковые предпочтения успешно сохранены.",
    language_change_note: "Примечание: Изменение языка вступит в силу при следующем выполнении команды.",

    error_reading_store: "Ошибка чтения файла .rtag: {error}",
    add_tag_failed: "Не удалось добавить тег: {error}",
    add_tag_success: "Тег успешно добавлен: {tag}",
    read_tags_failed: "Не удалось прочитать теги: {error}",
    tag_not_in_store: "Тег '{tag}' не существует в файле .rtag",
    remove_tag_failed: "Не удалось удалить тег: {error}",
    remove_tag_success: "Тег успешно удален: {tag}",
    read_input_failed: "Не удалось прочитать ввод: {error}",
    start_pushing_tags: "Начинаем отправку тегов (временная метка: {timestamp})...",
    create_git_tag: "Создание git тега: {name}",
    create_tag_failed: "Не удалось создать тег {name}: {error}",
    push_tags_failed: "Не удалось отправить теги: {error}",
    tag_already_exists: "тег '{tag}' уже существует",
    tag_not_exist: "тег '{tag}' не существует",
    language_usage: "Использование: rtag lang [{codes}]",
    environment_variable: "Переменная окружения: RTAG_LANG=[{codes}]",
    config_file: "Файл конфигурации: {path}",
    language_set_to: "Язык установлен на {name}",
    invalid_language: "Недопустимый язык '{value}'. Поддерживаемые языки: {codes}",
};
