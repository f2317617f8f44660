use crate::error::ConsoleError;
use crate::http_handler::{
    Aircraft, AircraftFilter, Configuration, Estimate, Registration, Route, RouteDraft,
    RouteSuggestion,
};
use crate::keychain::Keychain;
use crate::session::{Admission, Session};
use crate::views::{CandidateView, ConfiguratorContext, DashboardStats, Outcome};
use crate::{info, log, warn};
use std::sync::Arc;
use strum_macros::Display;

pub const USAGE: &str = "\
usage: fleet-console <command>

  login <email> <password>
  logout
  register <email> <password> <airline> <hub>
  whoami
  dashboard
  aircraft [manufacturer=..] [category=..] [min_range=..] [max_range=..] [type=..]
  aircraft <id>
  routes [hub] [aircraft_id]
  route <route_id>
  route-add <origin> <destination>
  route-update <route_id> <origin> <destination>
  route-remove <route_id>
  configure <aircraft_id> <route_id>";

/// A parsed command line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Help,
    Login { email: String, password: String },
    Logout,
    Register(Registration),
    WhoAmI,
    Dashboard,
    Aircraft(AircraftFilter),
    AircraftDetail(u64),
    Routes { hub: Option<String>, aircraft_id: Option<u64> },
    RouteDetail(u64),
    RouteAdd(RouteDraft),
    RouteUpdate { id: u64, draft: RouteDraft },
    RouteRemove(u64),
    Configure { aircraft_id: u64, route_id: u64 },
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum UsageError {
    #[strum(to_string = "missing argument")]
    MissingArgument,
    #[strum(to_string = "too many arguments")]
    TooManyArguments,
    #[strum(to_string = "unknown command")]
    UnknownCommand,
    #[strum(to_string = "expected a number")]
    InvalidNumber,
    #[strum(to_string = "unknown filter, use key=value with manufacturer, category, min_range, max_range or type")]
    InvalidFilter,
}

impl std::error::Error for UsageError {}

/// How a command ended when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Done,
    /// The command needs a session and there is none.
    RedirectedToLogin,
}

fn number<T: std::str::FromStr>(arg: &str) -> Result<T, UsageError> {
    arg.trim().parse().map_err(|_| UsageError::InvalidNumber)
}

fn exact<const N: usize>(args: &[String]) -> Result<[&str; N], UsageError> {
    match args.len() {
        n if n < N => Err(UsageError::MissingArgument),
        n if n > N => Err(UsageError::TooManyArguments),
        _ => Ok(std::array::from_fn(|i| args[i].as_str())),
    }
}

fn parse_filter(args: &[String]) -> Result<AircraftFilter, UsageError> {
    let mut filter = AircraftFilter::default();
    for arg in args {
        let (key, value) = arg.split_once('=').ok_or(UsageError::InvalidFilter)?;
        match key.trim() {
            "manufacturer" => filter.manufacturer = value.to_string(),
            "category" => filter.category = value.to_string(),
            "type" => filter.aircraft_type = value.to_string(),
            "min_range" => filter.min_range = Some(number(value)?),
            "max_range" => filter.max_range = Some(number(value)?),
            _ => return Err(UsageError::InvalidFilter),
        }
    }
    Ok(filter)
}

impl Command {
    /// Parses the arguments following the program name.
    pub fn parse<I>(args: I) -> Result<Self, UsageError>
    where I: IntoIterator<Item = String> {
        let mut args: Vec<String> = args.into_iter().collect();
        if args.is_empty() {
            return Ok(Command::Help);
        }
        let name = args.remove(0);
        match name.as_str() {
            "help" | "--help" | "-h" => Ok(Command::Help),
            "login" => {
                let [email, password] = exact::<2>(&args)?;
                Ok(Command::Login { email: email.to_string(), password: password.to_string() })
            }
            "logout" => exact::<0>(&args).map(|_| Command::Logout),
            "register" => {
                let [email, password, airline, hub] = exact::<4>(&args)?;
                Ok(Command::Register(Registration {
                    email: email.to_string(),
                    password: password.to_string(),
                    airline_name: airline.to_string(),
                    hub_airport_code: hub.to_uppercase(),
                }))
            }
            "whoami" => exact::<0>(&args).map(|_| Command::WhoAmI),
            "dashboard" => exact::<0>(&args).map(|_| Command::Dashboard),
            "aircraft" => match args.as_slice() {
                [single] if !single.contains('=') => Ok(Command::AircraftDetail(number(single)?)),
                filters => Ok(Command::Aircraft(parse_filter(filters)?)),
            },
            "routes" => match args.as_slice() {
                [] => Ok(Command::Routes { hub: None, aircraft_id: None }),
                [hub] => Ok(Command::Routes { hub: Some(hub.clone()), aircraft_id: None }),
                [hub, aircraft] => Ok(Command::Routes {
                    hub: Some(hub.clone()),
                    aircraft_id: Some(number(aircraft)?),
                }),
                _ => Err(UsageError::TooManyArguments),
            },
            "route" => {
                let [id] = exact::<1>(&args)?;
                Ok(Command::RouteDetail(number(id)?))
            }
            "route-add" => {
                let [origin, destination] = exact::<2>(&args)?;
                Ok(Command::RouteAdd(RouteDraft {
                    origin_airport_code: origin.to_uppercase(),
                    destination_airport_code: destination.to_uppercase(),
                }))
            }
            "route-update" => {
                let [id, origin, destination] = exact::<3>(&args)?;
                Ok(Command::RouteUpdate {
                    id: number(id)?,
                    draft: RouteDraft {
                        origin_airport_code: origin.to_uppercase(),
                        destination_airport_code: destination.to_uppercase(),
                    },
                })
            }
            "route-remove" => {
                let [id] = exact::<1>(&args)?;
                Ok(Command::RouteRemove(number(id)?))
            }
            "configure" => {
                let [aircraft, route] = exact::<2>(&args)?;
                Ok(Command::Configure { aircraft_id: number(aircraft)?, route_id: number(route)? })
            }
            _ => Err(UsageError::UnknownCommand),
        }
    }

    /// Returns `true` if the command may only run inside an authenticated session.
    pub fn is_protected(&self) -> bool {
        !matches!(
            self,
            Command::Help | Command::Login { .. } | Command::Logout | Command::Register(_)
        )
    }
}

/// Restores the session and runs `command` against it.
pub async fn execute(keychain: &Keychain, command: Command) -> Result<Completion, ConsoleError> {
    keychain.session().restore().await;
    if !command.is_protected() {
        run_public(keychain, command).await?;
        return Ok(Completion::Done);
    }

    let session = match keychain.gate().resolved().await {
        Admission::Admit(session) => session,
        Admission::RedirectToLogin | Admission::Loading => {
            warn!("Not signed in, run `fleet-console login <email> <password>` first");
            return Ok(Completion::RedirectedToLogin);
        }
    };
    run_protected(keychain, &session, command).await?;
    Ok(Completion::Done)
}

async fn run_public(keychain: &Keychain, command: Command) -> Result<(), ConsoleError> {
    let store = keychain.session();
    match command {
        Command::Login { email, password } => {
            let session = store.login(&email, &password).await?;
            print_session(&session);
        }
        Command::Logout => {
            store.logout().await?;
            println!("Signed out.");
        }
        Command::Register(registration) => {
            store.register(&registration).await?;
            println!("Airline {} registered, you can now log in.", registration.airline_name);
        }
        _ => println!("{USAGE}"),
    }
    Ok(())
}

async fn run_protected(
    keychain: &Keychain,
    session: &Arc<Session>,
    command: Command,
) -> Result<(), ConsoleError> {
    match command {
        Command::WhoAmI => print_session(session),
        Command::Dashboard => {
            if let Outcome::Applied(stats) = keychain.dashboard().refresh().await? {
                print_dashboard(&stats);
            }
        }
        Command::Aircraft(filter) => {
            let engine = keychain.filter_engine();
            engine.load().await?;
            engine.set_criteria(filter).await;
            if let Outcome::Applied(view) = engine.apply().await? {
                print_aircraft(&view);
            }
        }
        Command::AircraftDetail(id) => {
            print_aircraft(&[keychain.collections().aircraft_by_id(id).await?]);
        }
        Command::Routes { hub, aircraft_id } => {
            let finder = keychain.route_finder(Some(session.as_ref()));
            if let Some(hub) = hub {
                finder.set_hub(&hub).await;
            }
            finder.set_aircraft(aircraft_id).await;
            if let Outcome::Applied(suggestions) = finder.search().await? {
                print_suggestions(&suggestions);
            }
        }
        Command::RouteDetail(id) => {
            print_routes(&[keychain.collections().route_by_id(id).await?]);
        }
        Command::RouteAdd(draft) => {
            let route = keychain.collections().create_route(&draft).await?;
            info!("Opened route {}", route.id());
            print_routes(&[route]);
        }
        Command::RouteUpdate { id, draft } => {
            let route = keychain.collections().update_route(id, &draft).await?;
            info!("Updated route {id}");
            print_routes(&[route]);
        }
        Command::RouteRemove(id) => {
            let collections = keychain.collections();
            collections.delete_route(id).await?;
            info!("Closed route {id}, {} routes remain", collections.routes().await.len());
        }
        Command::Configure { aircraft_id, route_id } => {
            configure(keychain, aircraft_id, route_id).await?;
        }
        _ => println!("{USAGE}"),
    }
    Ok(())
}

async fn configure(keychain: &Keychain, aircraft_id: u64, route_id: u64) -> Result<(), ConsoleError> {
    let configurator = keychain.configurator();
    if let Err(e) = configurator.load().await {
        warn!("Could not load fleet and routes: {}", e.detail());
    }
    configurator.select_aircraft(Some(aircraft_id)).await;
    configurator.select_route(Some(route_id)).await;
    if let Some(context) = configurator.context().await {
        print_context(&context);
    }

    let (found, optimized) =
        tokio::join!(configurator.find_configurations(), configurator.optimize());
    found?;
    let views = configurator.candidate_views().await;
    if views.is_empty() {
        println!("No configurations recommended.");
    }
    for view in &views {
        print_candidate(view);
    }
    match optimized? {
        Outcome::Applied(Some(config)) => {
            println!("Optimized:");
            print_configuration("  ", &config);
        }
        Outcome::Applied(None) => log!("Service returned no optimized configuration"),
        Outcome::Superseded => {}
    }
    Ok(())
}

fn estimate(value: Estimate) -> String {
    match value {
        Estimate::Known(val) => format!("{val:.0}"),
        Estimate::Unknown => "n/a".to_string(),
    }
}

fn print_session(session: &Session) {
    let user = session.user();
    match user.airline() {
        Some(airline) => println!(
            "{} ({}), airline {} at {}, balance {:.0}",
            user.email(),
            user.id(),
            airline.name(),
            airline.hub_airport_code(),
            airline.balance()
        ),
        None => println!("{} ({})", user.email(), user.id()),
    }
}

fn print_dashboard(stats: &DashboardStats) {
    println!("Routes:         {}", stats.total_routes());
    println!("Aircraft:       {}", stats.total_aircraft());
    println!("Total profit:   {:.0}", stats.total_profit());
    println!("Average profit: {:.0}", stats.average_profit());
    match stats.most_profitable() {
        Some(route) => println!(
            "Best route:     {} -> {} ({})",
            route.origin_airport_code(),
            route.destination_airport_code(),
            estimate(route.estimated_profit())
        ),
        None => println!("Best route:     none"),
    }
    if let Some(aircraft) = stats.recommended_aircraft() {
        println!("Recommended:    {} {}", aircraft.manufacturer(), aircraft.model());
    }
}

fn print_aircraft(aircraft: &[Aircraft]) {
    if aircraft.is_empty() {
        println!("No aircraft match.");
    }
    for a in aircraft {
        println!(
            "#{:<4} {} {:<14} {:>6} km {:>4} km/h {:>4} seats {:>12.0}",
            a.id(),
            a.manufacturer(),
            a.model(),
            a.range_km(),
            a.speed_kmh(),
            a.total_capacity(),
            a.price()
        );
    }
}

fn print_routes(routes: &[Route]) {
    if routes.is_empty() {
        println!("No routes found.");
    }
    for r in routes {
        println!(
            "#{:<4} {} -> {} {:<20} {:>7.0} km {:>5} h demand {}/{}/{} profit {}",
            r.id(),
            r.origin_airport_code(),
            r.destination_airport_code(),
            r.destination_city().unwrap_or_default(),
            r.distance_km(),
            r.flight_time_hours().known().map_or("n/a".to_string(), |h| format!("{h:.1}")),
            r.demand_economy(),
            r.demand_business(),
            r.demand_first(),
            estimate(r.estimated_profit())
        );
    }
}

fn print_suggestions(suggestions: &[RouteSuggestion]) {
    if suggestions.is_empty() {
        println!("No routes recommended.");
    }
    for (pos, s) in suggestions.iter().enumerate() {
        println!(
            "{:>2}. {} -> {} {:<20} {:<16} {:>7.0} km demand {}/{}/{} cargo {} profit {}",
            pos + 1,
            s.origin_airport_code(),
            s.destination_airport_code(),
            s.destination_city().or(s.destination_name()).unwrap_or_default(),
            s.destination_country().unwrap_or_default(),
            s.distance_km(),
            s.demand_economy(),
            s.demand_business(),
            s.demand_first(),
            s.demand_cargo(),
            estimate(s.estimated_profit())
        );
    }
}

fn print_context(context: &ConfiguratorContext) {
    let (eco, business, first) = context.default_seats;
    let (d_eco, d_business, d_first) = context.demand;
    println!("Delivered layout {eco}/{business}/{first}, demand {d_eco}/{d_business}/{d_first}");
}

fn print_candidate(view: &CandidateView) {
    let mut flags = Vec::new();
    if view.is_best {
        flags.push("best");
    }
    if view.is_default {
        flags.push("default");
    }
    println!("{}. {} [{}]", view.rank, view.label, flags.join(", "));
    print_configuration("   ", &view.configuration);
}

fn print_configuration(indent: &str, config: &Configuration) {
    println!(
        "{indent}seats {}/{}/{} load {:.1}/{:.1}/{:.1}% overall {:.1}%",
        config.eco(),
        config.business(),
        config.first(),
        config.eco_load(),
        config.business_load(),
        config.first_load(),
        config.overall_load()
    );
    println!(
        "{indent}revenue {:.0} cost {:.0} profit {:.0}",
        config.total_revenue(),
        config.total_cost(),
        config.profit()
    );
}
