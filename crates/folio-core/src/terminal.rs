//! A tiny fake shell for the contact section.

pub const PROMPT: &str = "$";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectEntry {
    pub title: String,
    pub summary: String,
    pub url: Option<String>,
}

/// Content the shell answers with.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    pub name: String,
    pub role: String,
    pub about: String,
    pub skills: Vec<String>,
    pub projects: Vec<ProjectEntry>,
    /// (label, address) pairs. `email`, `linkedin` and `github` back the
    /// commands of the same name; the latter two may be bare handles.
    pub contacts: Vec<(String, String)>,
}

impl Profile {
    pub fn contact(&self, label: &str) -> Option<&str> {
        self.contacts
            .iter()
            .find(|(l, _)| l.eq_ignore_ascii_case(label))
            .map(|(_, addr)| addr.as_str())
    }

    pub fn email(&self) -> Option<&str> {
        self.contact("email")
    }

    pub fn linkedin_url(&self) -> Option<String> {
        self.contact("linkedin")
            .map(|h| profile_url("https://linkedin.com/in/", h))
    }

    pub fn github_url(&self) -> Option<String> {
        self.contact("github")
            .map(|h| profile_url("https://github.com/", h))
    }
}

fn profile_url(base: &str, handle: &str) -> String {
    if handle.starts_with("http://") || handle.starts_with("https://") {
        handle.to_string()
    } else {
        format!("{}{}", base, handle.trim_start_matches('@'))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Clear,
    ToggleTheme,
    /// Navigate to a link once the reply has been shown.
    Open(String),
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Response {
    pub lines: Vec<String>,
    pub action: Option<Action>,
}

impl Response {
    fn lines<I: IntoIterator<Item = String>>(lines: I) -> Self {
        Self {
            lines: lines.into_iter().collect(),
            action: None,
        }
    }

    fn line(line: String) -> Self {
        Self::lines([line])
    }
}

/// One pre-filled transcript entry: a command as if typed, and its output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    pub command: String,
    pub output: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command<'a> {
    Empty,
    Help,
    Email,
    Linkedin,
    Github,
    Skills,
    Hire,
    Clear,
    About,
    Projects,
    Contact,
    Whoami,
    Echo(&'a str),
    History,
    Theme,
    Sudo,
    Unknown(&'a str),
}

impl<'a> Command<'a> {
    pub fn parse(line: &'a str) -> Self {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((w, r)) => (w, r.trim()),
            None => (line, ""),
        };
        let word_lc = word.to_ascii_lowercase();
        // Only `echo` and `sudo` take arguments.
        if !rest.is_empty() && word_lc != "echo" && word_lc != "sudo" {
            return Command::Unknown(line);
        }
        match word_lc.as_str() {
            "" => Command::Empty,
            "help" => Command::Help,
            "email" => Command::Email,
            "linkedin" => Command::Linkedin,
            "github" => Command::Github,
            "skills" => Command::Skills,
            "hire" => Command::Hire,
            "clear" => Command::Clear,
            "about" => Command::About,
            "projects" => Command::Projects,
            "contact" => Command::Contact,
            "whoami" => Command::Whoami,
            "echo" => Command::Echo(rest),
            "history" => Command::History,
            "theme" => Command::Theme,
            "sudo" => Command::Sudo,
            _ => Command::Unknown(line),
        }
    }
}

const COMMANDS: &str = "email, linkedin, github, skills, hire, clear";
const MORE_COMMANDS: &str = "about, projects, contact, whoami, echo, history, theme";

pub struct Terminal {
    profile: Profile,
    history: Vec<String>,
    /// Position while browsing history with up/down; `None` when editing.
    cursor: Option<usize>,
}

impl Terminal {
    pub fn new(profile: Profile) -> Self {
        Self {
            profile,
            history: Vec::new(),
            cursor: None,
        }
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn history(&self) -> &[String] {
        &self.history
    }

    fn whoami(&self) -> String {
        if self.profile.role.is_empty() {
            self.profile.name.clone()
        } else {
            format!("{} - {}", self.profile.name, self.profile.role)
        }
    }

    /// The transcript shown before anything is typed.
    pub fn greeting(&self) -> Vec<Entry> {
        let entry = |command: &str, output: String| Entry {
            command: command.to_string(),
            output,
        };
        vec![
            entry("whoami", self.whoami()),
            entry("ls skills/", self.profile.skills.join("  ")),
            entry(
                "cat contact.txt",
                "Ready to collaborate on your next project!".to_string(),
            ),
        ]
    }

    pub fn execute(&mut self, line: &str) -> Response {
        self.cursor = None;
        let command = Command::parse(line);
        if command != Command::Empty {
            self.history.push(line.trim().to_string());
        }
        match command {
            Command::Empty => Response::default(),
            Command::Help => Response::lines([
                format!("Available commands: {}", COMMANDS),
                format!("Also: {}", MORE_COMMANDS),
            ]),
            Command::Email => match self.profile.email() {
                Some(email) => Response {
                    lines: vec![format!("Opening mail client... {}", email)],
                    action: Some(Action::Open(format!("mailto:{}", email))),
                },
                None => Response::line("No email address on file.".to_string()),
            },
            Command::Linkedin => open_link("LinkedIn", self.profile.linkedin_url()),
            Command::Github => open_link("GitHub", self.profile.github_url()),
            Command::Skills => Response::line(self.profile.skills.join(", ")),
            Command::Hire => Response::line(match self.profile.email() {
                Some(email) => format!("Excellent choice! Please send an email to {}.", email),
                None => "Excellent choice! Type 'contact' to reach me.".to_string(),
            }),
            Command::Clear => Response {
                lines: Vec::new(),
                action: Some(Action::Clear),
            },
            Command::About => Response::lines([self.whoami(), self.profile.about.clone()]),
            Command::Projects => Response::lines(self.profile.projects.iter().map(|p| {
                match &p.url {
                    Some(url) => format!("* {} - {} ({})", p.title, p.summary, url),
                    None => format!("* {} - {}", p.title, p.summary),
                }
            })),
            Command::Contact => Response::lines(
                self.profile
                    .contacts
                    .iter()
                    .map(|(label, addr)| format!("{}: {}", label, addr)),
            ),
            Command::Whoami => Response::line(self.whoami()),
            Command::Echo(text) => Response::line(text.to_string()),
            Command::History => Response::lines(
                self.history
                    .iter()
                    .enumerate()
                    .map(|(i, h)| format!("{:>4}  {}", i + 1, h)),
            ),
            Command::Theme => Response {
                lines: vec!["Switching theme...".to_string()],
                action: Some(Action::ToggleTheme),
            },
            Command::Sudo => Response::line(
                "guest is not in the sudoers file. This incident will be reported.".to_string(),
            ),
            Command::Unknown(input) => Response::line(format!(
                "Command not found: {}. Type 'help' for a list of commands.",
                input
            )),
        }
    }

    /// Step back through history (arrow up).
    pub fn history_prev(&mut self) -> Option<&str> {
        if self.history.is_empty() {
            return None;
        }
        let next = match self.cursor {
            None => self.history.len() - 1,
            Some(0) => 0,
            Some(i) => i - 1,
        };
        self.cursor = Some(next);
        self.history.get(next).map(String::as_str)
    }

    /// Step forward (arrow down); past the newest entry returns to an empty line.
    pub fn history_next(&mut self) -> Option<&str> {
        match self.cursor {
            Some(i) if i + 1 < self.history.len() => {
                self.cursor = Some(i + 1);
                self.history.get(i + 1).map(String::as_str)
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

fn open_link(site: &str, url: Option<String>) -> Response {
    match url {
        Some(url) => Response {
            lines: vec![format!("Opening {}... {}", site, url)],
            action: Some(Action::Open(url)),
        },
        None => Response::line(format!("No {} profile on file.", site)),
    }
}
