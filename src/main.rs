use std::io::Write;

use dbx_client::{
    files::{print_tree, FilesClient},
    oauth2::token::AppCredentials,
    users::{render_account, UsersClient},
    Client, Error, RequestConfig,
};

const CLIENT_IDENTIFIER: &str = "desktop-client";

#[derive(Debug, PartialEq)]
enum Command<'a> {
    Auth {
        app_key: &'a str,
        app_secret: &'a str,
    },
    Info {
        access_token: &'a str,
        locale: &'a str,
    },
    List {
        access_token: &'a str,
        path: &'a str,
        locale: &'a str,
    },
    Help,
}

#[derive(Debug, PartialEq)]
struct UsageError {
    message: &'static str,
    show_help: bool,
}

impl UsageError {
    fn new(message: &'static str) -> Self {
        Self {
            message,
            show_help: false,
        }
    }

    fn with_help(message: &'static str) -> Self {
        Self {
            message,
            show_help: true,
        }
    }
}

/// Arity rules and diagnostics are part of the observable contract, so the
/// arguments are matched by hand instead of through a derive-style parser.
fn parse_command(args: &[String]) -> Result<Command<'_>, UsageError> {
    let Some(first) = args.first() else {
        return Ok(Command::Help);
    };
    match first.as_str() {
        "auth" => match args.len() {
            2 => Err(UsageError::new(
                "Missing mandatory parametes appsecret, please verify.",
            )),
            3 => Ok(Command::Auth {
                app_key: &args[1],
                app_secret: &args[2],
            }),
            _ => Err(UsageError::with_help(
                "Invalid input parameters , please verify and retry.",
            )),
        },
        "info" => match args.len() {
            1 => Err(UsageError::new(
                "Missing authentication token, please verify and try again.",
            )),
            2 => Ok(Command::Info {
                access_token: &args[1],
                locale: "",
            }),
            3 => Ok(Command::Info {
                access_token: &args[1],
                locale: &args[2],
            }),
            _ => Err(UsageError::with_help(
                "Invalid input parameters , please verify and retry.",
            )),
        },
        "list" => match args.len() {
            1 => Err(UsageError::new(
                "Missing authentication token, please verify and try again.",
            )),
            2 => Ok(Command::List {
                access_token: &args[1],
                path: "",
                locale: "",
            }),
            3 => Ok(Command::List {
                access_token: &args[1],
                path: &args[2],
                locale: "",
            }),
            4 => Ok(Command::List {
                access_token: &args[1],
                path: &args[2],
                locale: &args[3],
            }),
            _ => Err(UsageError::with_help(
                "Invalid input parameters, please verify and try again.",
            )),
        },
        _ => Ok(Command::Help),
    }
}

async fn run(args: &[String]) {
    match parse_command(args) {
        Ok(Command::Auth {
            app_key,
            app_secret,
        }) => get_access_token(app_key, app_secret).await,
        Ok(Command::Info {
            access_token,
            locale,
        }) => fetch_and_display_user_info(access_token, locale).await,
        Ok(Command::List {
            access_token,
            path,
            locale,
        }) => retrieve_file_info(access_token, path, locale).await,
        Ok(Command::Help) => print_help_menu(),
        Err(usage) => {
            log::error!("\n {}", usage.message);
            if usage.show_help {
                print_help_menu();
            }
        }
    }
}

fn build_client(locale: &str) -> Option<Client> {
    let config = RequestConfig::new(CLIENT_IDENTIFIER).with_user_locale(locale);
    match Client::new(&config) {
        Ok(client) => Some(client),
        Err(err) => {
            log::error!("Error occured while creating the api client: {}", err);
            None
        }
    }
}

/// Walks the user through the no-redirect authorization flow and exchanges
/// the pasted code for an access token.
async fn get_access_token(app_key: &str, app_secret: &str) {
    let Some(client) = build_client("") else {
        return;
    };
    let credentials = AppCredentials::new(app_key, app_secret);

    println!("1. Go to  {}", credentials.authorize_url());
    println!("2. Click \"Allow\" (you might have to log in first).");
    println!("3. Copy the authorization code.");
    print!("Enter the authorization code here: ");
    std::io::stdout().flush().ok();

    let mut code = String::new();
    if let Err(err) = std::io::stdin().read_line(&mut code) {
        log::error!("Invalid input data: Error :{}", err);
        return;
    }
    let code = code.trim();

    match credentials.exchange_code(&client, code).await {
        Ok(token) => {
            log::info!("Authorization completed successfully.");
            println!("Your access token: {}", token.access_token());
        }
        Err(err) => log::error!("Error occured while authorizing the request: {:?}", err),
    }
}

async fn fetch_and_display_user_info(access_token: &str, locale: &str) {
    let Some(client) = build_client(locale) else {
        return;
    };
    let users = UsersClient::new(client, access_token);
    match users.get_current_account().await {
        Ok(account) => println!("{}", render_account(&account)),
        Err(err) => log::error!(
            "Error occured while geting user information from dropbox api: {}",
            err
        ),
    }
}

async fn retrieve_file_info(access_token: &str, path: &str, locale: &str) {
    let Some(client) = build_client(locale) else {
        return;
    };
    let files = FilesClient::new(client, access_token);
    let mut out = std::io::stdout();
    match print_tree(&files, path, &mut out).await {
        Ok(()) => {}
        Err(Error::DbxInvalidPath { path, message }) => log::error!(
            "\n Invalid path: {}, please verify and retry again. Cause: {}",
            path,
            message
        ),
        Err(err) => log::error!("\n Internal error cause:{}", err),
    }
}

fn print_help_menu() {
    println!();
    println!("|--------------------------------------------------|");
    println!("|                   Help Menu                      |");
    println!("|--------------------------------------------------|");
    println!();
    println!("auth    --> Authenticates and authorizes the access to Dropbox account");
    println!("            Example:  dbx-client auth {{appKey}} {{appSecret}}");
    println!();
    println!("info    --> Retrieves and prints user's account information");
    println!("            Example:  dbx-client info {{authToken}} {{locale}}");
    println!();
    println!("list    --> Prints files and folders information for specified path");
    println!("            Example:  dbx-client list {{dir}} {{locale}}");
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    run(&args).await;
}
