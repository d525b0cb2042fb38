use super::*;

#[test]
fn test_command_names() {
    assert_eq!(Command::Convert.name(), "convert");
    assert_eq!(Command::NextUnit.name(), "nextUnit");
    assert_eq!(Command::CopyResults.name(), "copyResults");
}

#[test]
fn test_from_name_round_trips_every_command() {
    for cmd in Command::ALL {
        assert_eq!(Command::from_name(cmd.name()), Some(cmd));
    }
}

#[test]
fn test_from_name_is_case_insensitive_and_trims() {
    assert_eq!(Command::from_name(" NEXTUNIT "), Some(Command::NextUnit));
    assert_eq!(Command::from_name("Quit"), Some(Command::Quit));
}

#[test]
fn test_from_name_aliases() {
    assert_eq!(Command::from_name("exit"), Some(Command::Quit));
    assert_eq!(Command::from_name("help"), Some(Command::About));
    assert_eq!(Command::from_name("save"), None);
    assert_eq!(Command::from_name(""), None);
}
