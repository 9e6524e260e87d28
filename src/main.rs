//! choreboard desktop shell
//!
//! Spawns the `choreboard-server` binary as a supervised child process,
//! waits for it to become ready, then shows its web UI in a native window.
//! Closing the window (or quitting the app) terminates the server exactly
//! once; if the server cannot be spawned at all, the shell exits without
//! opening a window.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::WebViewBuilder;

use choreboard::config::GlobalConfig;
use choreboard::shell::{ServerProcess, ShellSession, find_server_binary};

/// Delay before the single reload retry when the server was not ready
/// by the time the window opened
const RETRY_DELAY: Duration = Duration::from_secs(2);

/// choreboard - personal chore tracker
#[derive(Parser, Debug)]
#[command(
    name = "choreboard",
    version,
    about = "Personal chore tracker",
    long_about = "Launches the local choreboard server and shows its UI in a native window.\n\
                  The server process is terminated when the window closes."
)]
struct Cli {
    /// Port for the local server
    #[arg(long)]
    port: Option<u16>,

    /// Database file path
    #[arg(long)]
    db: Option<PathBuf>,

    /// Explicit path to the choreboard-server binary
    #[arg(long)]
    server_bin: Option<PathBuf>,

    /// Seconds to wait for the server before opening the window anyway
    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

/// Events injected into the window event loop from background threads
#[derive(Debug, Clone, Copy)]
enum ShellEvent {
    /// Reload the webview (one-shot startup retry)
    Reload,
}

fn main() {
    let cli = Cli::parse();
    let config = GlobalConfig::load();

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.logging.level.clone()),
    )
    .init();

    let port = config.resolve_port(cli.port);
    let database = config.resolve_database(cli.db);

    // Spawn failure is fatal: there is nothing to show a window for.
    let session = match start_server(cli.server_bin, port, &database) {
        Ok(session) => session,
        Err(e) => {
            log::error!("{e}");
            eprintln!("choreboard: {e}");
            std::process::exit(1);
        }
    };

    let ready = session.wait_for_ready(Duration::from_secs(cli.timeout_secs));
    if ready {
        log::info!("server ready at {}", session.root_url());
    } else {
        // Fallback path: open the window anyway and retry the load once.
        log::warn!("server not confirmed ready; opening window with retry scheduled");
    }

    run_window(session, ready);
}

/// Locate and spawn the server, wrapping it in a session
fn start_server(
    server_bin: Option<PathBuf>,
    port: u16,
    database: &std::path::Path,
) -> choreboard::Result<ShellSession> {
    let program = find_server_binary(server_bin)?;
    log::info!("starting server: {} (port {port})", program.display());
    let server = ServerProcess::spawn(&program, port, database)?;
    Ok(ShellSession::new(server, port))
}

/// Open the native window and run the event loop until exit
///
/// This function does not return; tao exits the process when the loop
/// ends, so the session is shut down inside the loop on every exit path.
fn run_window(mut session: ShellSession, ready: bool) -> ! {
    let event_loop = EventLoopBuilder::<ShellEvent>::with_user_event().build();

    let window = match WindowBuilder::new()
        .with_title("Choreboard")
        .with_inner_size(tao::dpi::LogicalSize::new(1000.0, 720.0))
        .build(&event_loop)
    {
        Ok(window) => window,
        Err(e) => {
            log::error!("failed to create window: {e}");
            session.shutdown();
            std::process::exit(1);
        }
    };

    let root_url = session.root_url().to_string();
    let builder = WebViewBuilder::new().with_url(&root_url);

    #[cfg(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    ))]
    let webview = builder.build(&window);

    #[cfg(not(any(
        target_os = "windows",
        target_os = "macos",
        target_os = "ios",
        target_os = "android"
    )))]
    let webview = {
        use tao::platform::unix::WindowExtUnix;
        use wry::WebViewBuilderExtUnix;
        match window.default_vbox() {
            Some(vbox) => builder.build_gtk(vbox),
            None => builder.build_gtk(window.gtk_window()),
        }
    };

    let webview = match webview {
        Ok(webview) => webview,
        Err(e) => {
            log::error!("failed to create webview: {e}");
            session.shutdown();
            std::process::exit(1);
        }
    };

    // If readiness was never confirmed the first load probably raced the
    // server's bind; schedule exactly one reload after a fixed delay.
    if !ready {
        let proxy = event_loop.create_proxy();
        std::thread::spawn(move || {
            std::thread::sleep(RETRY_DELAY);
            let _ = proxy.send_event(ShellEvent::Reload);
        });
    }

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                session.shutdown();
                *control_flow = ControlFlow::Exit;
            }
            Event::UserEvent(ShellEvent::Reload) => {
                if session.server_exited() {
                    log::error!("server process exited during startup");
                } else {
                    log::info!("retrying initial page load");
                    if let Err(e) = webview.load_url(&root_url) {
                        log::warn!("reload failed: {e}");
                    }
                }
            }
            Event::LoopDestroyed => {
                // Idempotent: a no-op when the close handler already ran.
                session.shutdown();
            }
            _ => {}
        }
    });
}
