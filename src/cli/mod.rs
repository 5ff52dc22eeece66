//! # CLI Module
//!
//! Command-line interface for the QR code reader.
//!
//! ## Usage
//! ```bash
//! # Scan one image, or every image in a directory
//! qr-read scan photo.png
//! qr-read scan ~/Screenshots
//!
//! # Launch the matching handler (browser, dialer, mail client)
//! qr-read scan photo.png --launch
//!
//! # Classify text without scanning
//! qr-read classify "tel:+1-555-0100"
//!
//! # JSON output
//! qr-read scan photo.png --output json
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use console::{style, Term};
use indicatif::{ProgressBar, ProgressStyle};
use qr_code_reader::core::decode::{expand_paths, Frame, RqrrDecoder};
use qr_code_reader::core::dispatch::{
    copy_to_clipboard, ActionDispatcher, ScanAction, SystemClipboard, SystemLauncher,
};
use qr_code_reader::core::report::ScanReport;
use qr_code_reader::core::session::{ScanSession, SessionConfig};
use qr_code_reader::core::BarcodeFormat;
use qr_code_reader::error::{QrReaderError, Result};
use qr_code_reader::events::{DispatchEvent, Event, EventChannel, ScanEvent};
use std::path::PathBuf;
use std::thread;

/// QR Code Reader - scan codes and act on what they contain
#[derive(Parser, Debug)]
#[command(name = "qr-read")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Scan image files or directories for QR codes
    Scan {
        /// Image files or directories to scan
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Launch the matching handler for each result
        #[arg(long)]
        launch: bool,

        /// Copy each decoded payload to the clipboard
        #[arg(long)]
        copy: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Classify a payload without scanning anything
    Classify {
        /// The text to classify
        text: String,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        output: OutputFormat,

        /// Launch the matching handler
        #[arg(long)]
        launch: bool,

        /// Copy the payload to the clipboard
        #[arg(long)]
        copy: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable output with colors
    Pretty,
    /// JSON output for scripting
    Json,
    /// Minimal output (payloads only)
    Minimal,
}

/// Run the CLI
pub fn run() -> Result<()> {
    qr_code_reader::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Scan {
            paths,
            output,
            launch,
            copy,
            verbose,
        } => run_scan(paths, output, launch, copy, verbose),
        Commands::Classify {
            text,
            output,
            launch,
            copy,
        } => run_classify(text, output, launch, copy),
    }
}

fn run_scan(
    paths: Vec<PathBuf>,
    output: OutputFormat,
    launch: bool,
    copy: bool,
    verbose: bool,
) -> Result<()> {
    let term = Term::stderr();

    if matches!(output, OutputFormat::Pretty) {
        term.write_line(&format!(
            "{} {}",
            style("QR Code Reader").bold().cyan(),
            style("v0.1.0").dim()
        ))
        .ok();
        term.write_line("").ok();
    }

    let expansion = expand_paths(&paths);
    let mut errors: Vec<String> = expansion.errors.iter().map(|e| e.to_string()).collect();

    if expansion.images.is_empty() {
        for message in &errors {
            term.write_line(&format!("{} {}", style("!").yellow(), message)).ok();
        }
        return Err(QrReaderError::Config(
            "no image files found in the given paths".to_string(),
        ));
    }

    // Set up event handling
    let (sender, receiver) = EventChannel::new();

    // Spinner for pretty output
    let progress = if matches!(output, OutputFormat::Pretty) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap(),
        );
        pb.set_message("Looking for QR codes...");
        Some(pb)
    } else {
        None
    };

    let progress_clone = progress.clone();
    let verbose_clone = verbose;

    // Render scan status in a separate thread
    let event_thread = thread::spawn(move || {
        for event in receiver.iter() {
            match event {
                Event::Scan(ScanEvent::Started) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Looking for QR codes...");
                    }
                }
                Event::Scan(ScanEvent::DecodeFailed { message }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Scan error, continuing...");
                        if verbose_clone {
                            pb.println(format!("decode failed: {message}"));
                        }
                    }
                }
                Event::Scan(ScanEvent::EmptyPayload) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message("Code detected but empty - realign and rescan");
                    }
                }
                Event::Scan(ScanEvent::PayloadFound { content_type, .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.set_message(format!("Recognized: {content_type}"));
                    }
                }
                Event::Scan(ScanEvent::Finished { .. }) => {
                    if let Some(ref pb) = progress_clone {
                        pb.finish_and_clear();
                    }
                }
                _ => {}
            }
        }
    });

    // Batch policy: every file is decoded, gate reopens after each hit
    let (session, hits) = ScanSession::spawn(
        Box::new(RqrrDecoder::new()),
        SessionConfig::batch(),
        sender.clone(),
    );

    for path in &expansion.images {
        match Frame::from_path(path) {
            Ok(frame) => {
                if session.send(frame).is_err() {
                    errors.push("decode worker stopped early".to_string());
                    break;
                }
            }
            Err(e) => errors.push(e.to_string()),
        }
    }

    let frames_handled = session.close();
    drop(sender);
    event_thread.join().ok();

    let reports: Vec<ScanReport> = hits.iter().map(ScanReport::new).collect();

    // Output results
    match output {
        OutputFormat::Pretty => print_pretty_results(&term, &reports, &errors, frames_handled),
        OutputFormat::Json => print_json_results(&reports, &errors, frames_handled),
        OutputFormat::Minimal => print_minimal_results(&reports),
    }

    for report in &reports {
        act_on_report(&term, report, launch, copy);
    }

    Ok(())
}

fn run_classify(text: String, output: OutputFormat, launch: bool, copy: bool) -> Result<()> {
    let term = Term::stderr();
    let report = ScanReport::from_parts(text, BarcodeFormat::Unknown.as_str().to_string());

    match output {
        OutputFormat::Pretty => print_report(&term, &report),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report).unwrap_or_default())
        }
        OutputFormat::Minimal => println!("{}", report.content_type),
    }

    act_on_report(&term, &report, launch, copy);
    Ok(())
}

/// Launch and/or copy, surfacing missing handlers as short notices
fn act_on_report(term: &Term, report: &ScanReport, launch: bool, copy: bool) {
    if launch {
        let (sender, receiver) = EventChannel::new();
        let dispatcher = ActionDispatcher::new(Box::new(SystemLauncher::new()));
        let launched = dispatcher.dispatch(&report.content, report.content_type, &sender);

        while let Some(event) = receiver.try_recv() {
            if let Event::Dispatch(DispatchEvent::NoHandler { action }) = event {
                term.write_line(&format!(
                    "{} No application available to {}",
                    style("!").yellow(),
                    action
                ))
                .ok();
            }
        }

        // Desktop share fallback: emit the payload itself
        if !launched && report.primary_action().action == ScanAction::Share {
            println!("{}", report.content);
        }
    }

    if copy {
        let (sender, receiver) = EventChannel::new();
        if copy_to_clipboard(&SystemClipboard::new(), &report.content, &sender) {
            term.write_line(&format!("{} Copied to clipboard", style("✓").green()))
                .ok();
        }

        while let Some(event) = receiver.try_recv() {
            if let Event::Dispatch(DispatchEvent::NoHandler { .. }) = event {
                term.write_line(&format!(
                    "{} Clipboard is not available",
                    style("!").yellow()
                ))
                .ok();
            }
        }
    }
}

fn print_pretty_results(
    term: &Term,
    reports: &[ScanReport],
    errors: &[String],
    frames_handled: usize,
) {
    term.write_line("").ok();

    if reports.is_empty() {
        term.write_line(&format!(
            "{} No QR codes found in {} image{}",
            style("○").dim(),
            frames_handled,
            if frames_handled == 1 { "" } else { "s" }
        ))
        .ok();
    } else {
        term.write_line(&format!(
            "{} {} code{} found",
            style("✓").green().bold(),
            style(reports.len()).cyan(),
            if reports.len() == 1 { "" } else { "s" }
        ))
        .ok();
        term.write_line("").ok();

        for report in reports {
            print_report(term, report);
        }
    }

    for message in errors {
        term.write_line(&format!("{} {}", style("!").yellow(), message)).ok();
    }
}

fn print_report(term: &Term, report: &ScanReport) {
    let action = report.primary_action();

    term.write_line(&format!("  {}", style(&report.content).bold())).ok();
    term.write_line(&format!(
        "    {} {} ({})",
        style("Type:").dim(),
        style(report.type_label()).yellow(),
        report.format
    ))
    .ok();
    term.write_line(&format!(
        "    {} {}",
        style("Scanned:").dim(),
        report.scanned_at_display()
    ))
    .ok();
    term.write_line(&format!(
        "    {} {} {}",
        style("Action:").dim(),
        action.action,
        style(&action.target).underlined()
    ))
    .ok();
    term.write_line("").ok();
}

fn print_json_results(reports: &[ScanReport], errors: &[String], frames_handled: usize) {
    let output = serde_json::json!({
        "frames_handled": frames_handled,
        "codes_found": reports.len(),
        "errors": errors,
        "results": reports.iter().map(|r| {
            let action = r.primary_action();
            serde_json::json!({
                "content": r.content,
                "format": r.format,
                "content_type": r.type_label(),
                "scanned_at": r.scanned_at_display(),
                "action": action.action.to_string(),
                "target": action.target,
            })
        }).collect::<Vec<_>>()
    });

    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}

fn print_minimal_results(reports: &[ScanReport]) {
    for report in reports {
        println!("{}", report.content);
    }
}
