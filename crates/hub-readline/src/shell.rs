//! Command execution for the interactive shell.
//!
//! Every command except `quit` ends by re-evaluating a location through the
//! navigator, so the printed view always reflects the session after the
//! command ran.

use anyhow::Result;
use hub_application::{AuthOutcome, HubContext, Navigation, Navigator};
use hub_core::client::Client;
use hub_core::identity::Identity;
use hub_core::routing::{LOGIN_PATH, ROOT_PATH, Route, View};

use crate::commands::Command;

const CLIENTS_PATH: &str = "/clients";

/// Command-specific output, printed alongside the settled view.
#[derive(Debug)]
pub enum Body<'a> {
    Empty,
    AlreadyAuthenticated,
    Authenticated(Identity),
    Rejected(&'static str),
    Menu(Vec<&'static Route>),
    Identity(Option<Identity>),
    Clients(Vec<&'a Client>),
    Help,
    Farewell,
}

#[derive(Debug)]
pub struct Reply<'a> {
    pub body: Body<'a>,
    /// The view the location settled on; `None` only for `quit`.
    pub navigation: Option<Navigation>,
}

impl<'a> Reply<'a> {
    fn new(body: Body<'a>, navigation: Navigation) -> Self {
        Self {
            body,
            navigation: Some(navigation),
        }
    }

    pub fn is_quit(&self) -> bool {
        matches!(self.body, Body::Farewell)
    }
}

pub struct Shell<'a> {
    context: &'a HubContext,
    nav: Navigator,
}

impl<'a> Shell<'a> {
    pub fn new(context: &'a HubContext) -> Self {
        Self {
            context,
            nav: context.navigator(),
        }
    }

    pub fn location(&self) -> &str {
        self.nav.location()
    }

    pub async fn is_authenticated(&self) -> bool {
        self.context.session_store.is_authenticated().await
    }

    /// Opens the root path, which lands on the login view or the role's view.
    pub async fn start(&mut self) -> Navigation {
        self.nav.navigate(ROOT_PATH).await
    }

    pub async fn execute(&mut self, command: Command) -> Result<Reply<'a>> {
        let context = self.context;
        let store = &context.session_store;

        let reply = match command {
            Command::Login { email, password } => {
                if store.is_authenticated().await {
                    Reply::new(Body::AlreadyAuthenticated, self.nav.refresh().await)
                } else {
                    match store.authenticate(&email, &password).await? {
                        // Landing goes through the login path so the role's
                        // view is reached from any prior location.
                        AuthOutcome::Authenticated(identity) => Reply::new(
                            Body::Authenticated(identity),
                            self.nav.navigate(LOGIN_PATH).await,
                        ),
                        AuthOutcome::Rejected { message } => {
                            Reply::new(Body::Rejected(message), self.nav.refresh().await)
                        }
                        AuthOutcome::Superseded => {
                            Reply::new(Body::Empty, self.nav.refresh().await)
                        }
                    }
                }
            }
            Command::Logout => {
                store.clear().await?;
                Reply::new(Body::Empty, self.nav.refresh().await)
            }
            Command::Go(path) => Reply::new(Body::Empty, self.nav.navigate(&path).await),
            Command::Nav => {
                let navigation = self.nav.refresh().await;
                Reply::new(Body::Menu(self.nav.menu().await), navigation)
            }
            Command::WhoAmI => {
                let navigation = self.nav.refresh().await;
                Reply::new(Body::Identity(store.current().await), navigation)
            }
            Command::Clients(filter) => {
                let navigation = self.nav.navigate(CLIENTS_PATH).await;
                let body = if navigation.view == View::Clients {
                    Body::Clients(filter.apply(context.catalog.clients()))
                } else {
                    Body::Empty
                };
                Reply::new(body, navigation)
            }
            Command::Help => Reply::new(Body::Help, self.nav.refresh().await),
            Command::Quit => Reply {
                body: Body::Farewell,
                navigation: None,
            },
        };
        Ok(reply)
    }
}
