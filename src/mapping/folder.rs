use crate::consts::KEEPER_FOLDER_SEPARATOR;

/// Bitwarden nests folders with `/`, Keeper with `\`
pub fn to_keeper_folder_path(name: &str) -> String {
    name.replace('/', &KEEPER_FOLDER_SEPARATOR.to_string())
}
