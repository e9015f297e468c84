//! Terminal output for views, menus and client lists.

use colored::Colorize;
use hub_application::Navigation;
use hub_core::client::{Client, TrafficLight};
use hub_core::identity::Identity;
use hub_core::routing::{NavSection, Route, View, find_route, is_active};

use crate::shell::{Body, Reply};

/// Prints the settled view followed by the command's own output.
pub fn reply(reply: &Reply<'_>) {
    if let Some(nav) = &reply.navigation {
        navigation(nav);
    }

    match &reply.body {
        Body::Empty => {}
        Body::AlreadyAuthenticated => {
            println!("{}", "Já autenticado. Use 'logout' primeiro.".yellow())
        }
        Body::Authenticated(user) => identity(Some(user)),
        Body::Rejected(message) => println!("{}", message.red()),
        Body::Menu(entries) => {
            let location = reply.navigation.as_ref().map_or("", |n| n.location.as_str());
            menu(entries, location);
        }
        Body::Identity(user) => identity(user.as_ref()),
        Body::Clients(found) => clients(found),
        Body::Help => help(),
        Body::Farewell => println!("{}", "Até logo!".bright_green()),
    }
}

pub fn navigation(nav: &Navigation) {
    if nav.was_redirected() {
        println!(
            "{}",
            format!("{} -> {}", nav.requested, nav.redirects.join(" -> ")).bright_black()
        );
    }

    match nav.view {
        View::NotFound => {
            println!("{}", "404".bright_red().bold());
            println!("{}", format!("Página não encontrada: {}", nav.location).red());
        }
        view => match find_route(&nav.location) {
            Some(route) => {
                println!(
                    "{} {}",
                    route.label.bright_magenta().bold(),
                    format!("[{}]", route.path).bright_black()
                );
                println!("{}", route.description.bright_black());
            }
            None => println!("{}", view.to_string().bright_magenta().bold()),
        },
    }
}

pub fn menu(entries: &[&'static Route], location: &str) {
    if entries.is_empty() {
        println!("{}", "Faça login para ver o menu.".yellow());
        return;
    }

    for section in [NavSection::Main, NavSection::Bottom] {
        for route in entries.iter().filter(|r| r.section == Some(section)) {
            let marker = if is_active(route, location) { "*" } else { " " };
            let line = format!(
                "{marker} {:<22} {:<12} {}",
                route.label, route.path, route.description
            );
            if is_active(route, location) {
                println!("{}", line.bright_green());
            } else {
                println!("{line}");
            }
        }
        if section == NavSection::Main {
            println!("{}", "  ──".bright_black());
        }
    }
}

pub fn identity(identity: Option<&Identity>) {
    match identity {
        Some(identity) => {
            let region = identity
                .region
                .as_deref()
                .map(|r| format!(" · Região {r}"))
                .unwrap_or_default();
            println!(
                "{} <{}> {}{}",
                identity.name.bright_blue().bold(),
                identity.email,
                identity.role,
                region
            );
        }
        None => println!("{}", "Não autenticado".yellow()),
    }
}

pub fn clients(clients: &[&Client]) {
    println!("{}", format!("Resultados ({} clientes)", clients.len()).bold());
    for client in clients {
        let light = match client.light {
            TrafficLight::Green => "●".green(),
            TrafficLight::Yellow => "●".yellow(),
            TrafficLight::Red => "●".red(),
        };
        println!(
            "{light} {:<24} {:<20} {:<16} {:<6} {:<14} {:>6.1}%",
            client.name,
            client.cnpj,
            client.city,
            client.segment.to_string(),
            client.service_status.to_string(),
            client.attainment
        );
    }
}

pub fn help() {
    println!("{}", "Comandos:".bold());
    println!("  login <email> <senha>   Entrar");
    println!("  logout                  Sair");
    println!("  go <caminho>            Navegar (ex.: go /clients)");
    println!("  nav                     Menu de navegação");
    println!("  whoami                  Usuário atual");
    println!("  clients [busca] [segment=..] [status=..] [type=..]");
    println!("  quit                    Encerrar");
    println!(
        "{}",
        "Contas de demonstração: vendedor@hering.com, planejamento@hering.com".bright_black()
    );
}
