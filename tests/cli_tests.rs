use broadside::{
    parse_placement, parse_setup_command, Coord, GameEvent, Orientation, SetupCommand, Side,
    TerminalCues,
};

#[test]
fn test_parse_placement() {
    assert_eq!(
        parse_placement("A5 H"),
        Ok((Coord::new(4, 0), Orientation::Horizontal))
    );
    assert_eq!(
        parse_placement("  c10 v "),
        Ok((Coord::new(9, 2), Orientation::Vertical))
    );
    assert_eq!(
        parse_placement("J1"),
        Ok((Coord::new(0, 9), Orientation::Horizontal))
    );
}

#[test]
fn test_parse_placement_errors() {
    assert!(parse_placement("").is_err());
    assert!(parse_placement("Z9 H").is_err());
    assert!(parse_placement("A5 X").unwrap_err().contains("orientation"));
}

#[test]
fn test_status_lines() {
    assert_eq!(
        GameEvent::ShipSunk {
            target: Side::Computer,
            ship: "Frigate"
        }
        .to_string(),
        "You sank the enemy Frigate!"
    );
    assert_eq!(
        GameEvent::ShipHit {
            target: Side::Player
        }
        .to_string(),
        "Your ship has been hit!"
    );
}

#[test]
fn test_mute_toggle() {
    let mut cues = TerminalCues::new(false);
    assert!(!cues.is_muted());
    assert!(cues.toggle_mute());
    assert!(cues.is_muted());
    assert!(!cues.toggle_mute());
}

#[test]
fn test_setup_commands() {
    assert_eq!(parse_setup_command(""), Ok(SetupCommand::Random));
    assert_eq!(parse_setup_command(" AUTO "), Ok(SetupCommand::Auto));
    assert_eq!(parse_setup_command("undo"), Ok(SetupCommand::Undo));
    assert_eq!(parse_setup_command("clear"), Ok(SetupCommand::Clear));
    assert_eq!(parse_setup_command("help"), Ok(SetupCommand::Help));
    assert_eq!(parse_setup_command("rotate 1"), Ok(SetupCommand::Rotate(0)));
    assert_eq!(parse_setup_command("Rotate 5"), Ok(SetupCommand::Rotate(4)));
    assert_eq!(
        parse_setup_command("d7 v"),
        Ok(SetupCommand::Place(Coord::new(6, 3), Orientation::Vertical))
    );
}

#[test]
fn test_setup_command_errors() {
    assert!(parse_setup_command("rotate").is_err());
    assert!(parse_setup_command("rotate 0").is_err());
    assert!(parse_setup_command("rotate 6").is_err());
    assert!(parse_setup_command("rotate two").is_err());
    assert!(parse_setup_command("undo 2").is_err());
}
