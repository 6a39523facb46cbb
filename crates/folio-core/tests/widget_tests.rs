// Host-side tests for the terminal interpreter and the project carousel.

use folio_core::terminal::{Action, Command};
use folio_core::{Carousel, Profile, ProjectEntry, Terminal};

fn profile() -> Profile {
    Profile {
        name: "Ada".to_string(),
        role: "Systems engineer".to_string(),
        about: "I build fast things.".to_string(),
        skills: vec!["Rust".to_string(), "WebAssembly".to_string()],
        projects: vec![
            ProjectEntry {
                title: "folio".to_string(),
                summary: "this site".to_string(),
                url: Some("https://example.com".to_string()),
            },
            ProjectEntry {
                title: "kiln".to_string(),
                summary: "a build tool".to_string(),
                url: None,
            },
        ],
        contacts: vec![
            ("email".to_string(), "ada@example.com".to_string()),
            ("linkedin".to_string(), "ada-l".to_string()),
            ("github".to_string(), "https://github.com/ada".to_string()),
        ],
    }
}

#[test]
fn parse_recognises_commands_case_insensitively() {
    assert_eq!(Command::parse("  HELP "), Command::Help);
    assert_eq!(Command::parse("GitHub"), Command::Github);
    assert_eq!(Command::parse("echo  hello world "), Command::Echo("hello world"));
    assert_eq!(Command::parse("   "), Command::Empty);
    assert_eq!(Command::parse("rm -rf /"), Command::Unknown("rm -rf /"));
    assert_eq!(Command::parse("help me"), Command::Unknown("help me"));
}

#[test]
fn help_lists_the_contact_commands_first() {
    let mut t = Terminal::new(profile());
    let help = t.execute("help").lines;
    assert_eq!(
        help[0],
        "Available commands: email, linkedin, github, skills, hire, clear"
    );
}

#[test]
fn link_commands_reply_then_open() {
    let mut t = Terminal::new(profile());

    let email = t.execute("email");
    assert_eq!(email.lines, vec!["Opening mail client... ada@example.com".to_string()]);
    assert_eq!(email.action, Some(Action::Open("mailto:ada@example.com".to_string())));

    let linkedin = t.execute("linkedin");
    assert_eq!(
        linkedin.lines,
        vec!["Opening LinkedIn... https://linkedin.com/in/ada-l".to_string()]
    );
    assert_eq!(
        linkedin.action,
        Some(Action::Open("https://linkedin.com/in/ada-l".to_string()))
    );

    // Full URLs are used as given.
    let github = t.execute("github");
    assert_eq!(github.action, Some(Action::Open("https://github.com/ada".to_string())));
}

#[test]
fn link_commands_without_a_contact_open_nothing() {
    let mut t = Terminal::new(Profile::default());
    for cmd in ["email", "linkedin", "github"] {
        let r = t.execute(cmd);
        assert_eq!(r.lines.len(), 1);
        assert!(r.action.is_none(), "{cmd} opened something");
    }
}

#[test]
fn hire_points_at_the_email_address() {
    let mut t = Terminal::new(profile());
    assert_eq!(
        t.execute("hire").lines,
        vec!["Excellent choice! Please send an email to ada@example.com.".to_string()]
    );
}

#[test]
fn greeting_is_a_prefilled_transcript() {
    let t = Terminal::new(profile());
    let entries = t.greeting();
    let commands: Vec<&str> = entries.iter().map(|e| e.command.as_str()).collect();
    assert_eq!(commands, ["whoami", "ls skills/", "cat contact.txt"]);
    assert_eq!(entries[0].output, "Ada - Systems engineer");
    assert_eq!(entries[1].output, "Rust  WebAssembly");
    assert_eq!(entries[2].output, "Ready to collaborate on your next project!");
    assert!(t.history().is_empty());
}

#[test]
fn commands_answer_from_the_profile() {
    let mut t = Terminal::new(profile());
    assert_eq!(t.execute("skills").lines, vec!["Rust, WebAssembly".to_string()]);

    let projects = t.execute("projects").lines;
    assert_eq!(projects.len(), 2);
    assert!(projects[0].contains("https://example.com"));
    assert_eq!(projects[1], "* kiln - a build tool");

    let contact = t.execute("contact").lines;
    assert_eq!(contact[0], "email: ada@example.com");

    let about = t.execute("about").lines;
    assert_eq!(about[0], "Ada - Systems engineer");
}

#[test]
fn unknown_and_blank_input() {
    let mut t = Terminal::new(profile());
    assert_eq!(
        t.execute("frobnicate").lines,
        vec!["Command not found: frobnicate. Type 'help' for a list of commands.".to_string()]
    );
    let blank = t.execute("   ");
    assert!(blank.lines.is_empty());
    assert!(blank.action.is_none());
    assert_eq!(t.history(), &["frobnicate".to_string()]);
}

#[test]
fn clear_and_theme_return_actions() {
    let mut t = Terminal::new(profile());
    assert_eq!(t.execute("clear").action, Some(Action::Clear));
    assert_eq!(t.execute("theme").action, Some(Action::ToggleTheme));
}

#[test]
fn history_navigation_walks_back_and_forth() {
    let mut t = Terminal::new(profile());
    assert_eq!(t.history_prev(), None);
    t.execute("about");
    t.execute("skills");
    t.execute("contact");

    assert_eq!(t.history_prev(), Some("contact"));
    assert_eq!(t.history_prev(), Some("skills"));
    assert_eq!(t.history_prev(), Some("about"));
    assert_eq!(t.history_prev(), Some("about"));
    assert_eq!(t.history_next(), Some("skills"));
    assert_eq!(t.history_next(), Some("contact"));
    assert_eq!(t.history_next(), None);

    let listed = t.execute("history").lines;
    assert_eq!(listed.len(), 4);
    assert!(listed[3].ends_with("history"));
}

#[test]
fn carousel_wraps_in_both_directions() {
    let mut c = Carousel::new(3, 5.0);
    assert_eq!(c.prev(), 2);
    assert_eq!(c.next(), 0);
    assert_eq!(c.next(), 1);
    assert_eq!(c.go_to(2), 2);
    assert_eq!(c.go_to(7), 2);
    assert_eq!(c.offset_percent(), -200.0);
}

#[test]
fn empty_carousel_stays_put() {
    let mut c = Carousel::new(0, 5.0);
    assert!(c.is_empty());
    assert_eq!(c.next(), 0);
    assert_eq!(c.prev(), 0);
    assert!(!c.tick(0.0));
    assert!(!c.tick(100.0));
}

#[test]
fn autoplay_advances_once_per_interval() {
    let mut c = Carousel::new(3, 5.0);
    assert!(!c.tick(0.0));
    assert!(!c.tick(4.9));
    assert!(c.tick(5.0));
    assert_eq!(c.index(), 1);
    // A long gap still moves only one slide.
    assert!(c.tick(30.0));
    assert_eq!(c.index(), 2);
    assert!(!c.tick(31.0));
}

#[test]
fn paused_or_manual_navigation_delays_autoplay() {
    let mut c = Carousel::new(3, 5.0);
    c.tick(0.0);
    c.set_paused(true);
    assert!(!c.tick(10.0));
    c.set_paused(false);
    assert!(c.tick(10.0));
    assert_eq!(c.index(), 1);

    c.next();
    assert!(!c.tick(11.0)); // interval restarts from the manual move
    assert!(!c.tick(15.0));
    assert!(c.tick(16.0));
    assert_eq!(c.index(), 0);
}
