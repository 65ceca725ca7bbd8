use super::Messages;

pub(super) static FRENCH: Messages = Messages {
    root_short: "Outil CLI pour gérer les tags de version",
    root_long: "rtag est un outil en ligne de commande pour gérer les tags de version avec intégration git.",
    init_short: "Initialiser le fichier .rtag",
    init_long: "Initialiser le fichier .rtag pour stocker les tags publiés.",
    add_short: "Ajouter un nouveau tag",
    add_long: "Ajouter un nouveau tag au fichier .rtag. Si aucun tag n'est fourni, le mode interactif sera utilisé.",
    push_short: "Pousser les tags vers le dépôt distant",
    push_long: "Pousser les tags vers le dépôt distant. Utilisez le flag --all pour pousser tous les tags.",
    list_short: "Lister tous les tags",
    list_long: "Lister tous les tags du fichier .rtag.",
    rm_short: "Supprimer un tag",
    rm_long: "Supprimer un tag du fichier .rtag.",
    lang_short: "Définir ou afficher la langue actuelle",
    lang_long: "Définir la langue de l'interface ou afficher les paramètres de langue actuels.",
    push_all_flag: "Pousser tous les tags",

    store_empty_or_missing: "Le fichier .rtag est vide ou n'existe pas",
    current_tags: "Tags actuels:",
    no_tags_found: "Aucun tag trouvé",
    specify_tag_or_use_all: "Veuillez spécifier un tag à pousser ou utiliser le flag --all",
    all_tags: "Tous les tags:",
    enter_tag: "Entrez un tag (ou 'exit' pour quitter): ",
    exit: "Quitter",
    tag_cannot_be_empty: "Le tag ne peut pas être vide, veuillez réessayer",
    continue_adding: "Continuer à ajouter? (y/n): ",
    pushing_tags_to_remote: "Poussée des tags vers le dépôt distant...",
    push_tags_success: "Tous les tags ont été poussés avec succès",
    current_language: "Langue actuelle",
    available_languages: "Langues disponibles",
    language_preference_saved: "Préférence de langue sauvegardée avec succès.",
    language_change_note: "Note: Le changement de langue prendra effet lors de la prochaine exécution de commande.",

    error_reading_store: "Erreur lors de la lecture du fichier .rtag: {error}",
    add_tag_failed: "Échec de l'ajout du tag: {error}",
    add_tag_success: "Tag ajouté avec succès: {tag}",
    read_tags_failed: "Échec de la lecture des tags: {error}",
    tag_not_in_store: "Le tag '{tag}' n'existe pas dans le fichier .rtag",
    remove_tag_failed: "Échec de la suppression du tag: {error}",
    remove_tag_success: "Tag supprimé avec succès: {tag}",
    read_input_failed: "Échec de la lecture de l'entrée: {error}",
    start_pushing_tags: "Début de la poussée des tags (horodatage: {timestamp})...",
    create_git_tag: "Création du tag git: {name}",
    create_tag_failed: "Échec de la création du tag {name}: {error}",
    push_tags_failed: "Échec de la poussée des tags: {error}",
    tag_already_exists: "le tag '{tag}' existe déjà",
    tag_not_exist: "le tag '{tag}' n'existe pas",
    language_usage: "Usage: rtag lang [{codes}]",
    environment_variable: "Variable d'environnement: RTAG_LANG=[{codes}]",
    config_file: "Fichier de config: {path}",
    language_set_to: "Langue définie sur {name}",
    invalid_language: "Langue invalide '{value}'. Langues supportées: {codes}",
};
