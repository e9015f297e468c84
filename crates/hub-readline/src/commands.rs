//! Shell command parsing.

use std::str::FromStr;

use hub_core::client::{ClientFilter, EventType, Segment, ServiceStatus};

/// Command names offered for completion.
pub const COMMAND_NAMES: &[&str] = &[
    "login", "logout", "go", "nav", "whoami", "clients", "help", "quit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Login { email: String, password: String },
    Logout,
    Go(String),
    Nav,
    WhoAmI,
    Clients(ClientFilter),
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            return Err("empty command".to_string());
        };
        let rest: Vec<&str> = words.collect();

        match name {
            "login" => match rest.as_slice() {
                [email] => Ok(Command::Login {
                    email: email.to_string(),
                    password: String::new(),
                }),
                [email, password] => Ok(Command::Login {
                    email: email.to_string(),
                    password: password.to_string(),
                }),
                _ => Err("usage: login <email> <password>".to_string()),
            },
            "logout" => Ok(Command::Logout),
            "go" => match rest.as_slice() {
                [path] => Ok(Command::Go(path.to_string())),
                _ => Err("usage: go <path>".to_string()),
            },
            "nav" => Ok(Command::Nav),
            "whoami" => Ok(Command::WhoAmI),
            "clients" => parse_client_filter(&rest).map(Command::Clients),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(format!("unknown command '{other}', type 'help'")),
        }
    }
}

/// Parses `[search words] [segment=..] [status=..] [type=..]`.
fn parse_client_filter(args: &[&str]) -> Result<ClientFilter, String> {
    let mut filter = ClientFilter::new();
    let mut search = Vec::new();

    for arg in args {
        match arg.split_once('=') {
            Some(("segment", value)) => {
                let segment = Segment::from_str(value)
                    .map_err(|_| format!("unknown segment '{value}'"))?;
                filter = filter.with_segment(segment);
            }
            Some(("status", value)) => {
                let status = ServiceStatus::from_str(value)
                    .map_err(|_| format!("unknown status '{value}'"))?;
                filter = filter.with_service_status(status);
            }
            Some(("type", value)) => {
                let event_type = EventType::from_str(value)
                    .map_err(|_| format!("unknown event type '{value}'"))?;
                filter = filter.with_event_type(event_type);
            }
            Some((key, _)) => return Err(format!("unknown filter '{key}'")),
            None => search.push(*arg),
        }
    }

    Ok(filter.with_search(search.join(" ")))
}
