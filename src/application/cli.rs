use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::application::commands;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AudioBackendName;
use crate::domain::models::CaptureName;
use crate::domain::models::SpeechName;

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
    std::process::exit(0);
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if !config_file_path.parent().unwrap().exists() {
        fs::create_dir_all(config_file_path.parent().unwrap()).await?;
    }

    let mut file = fs::File::create(config_file_path.clone()).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    let config_path_display = config_file_path.as_os_str().to_str().unwrap();
    println!("Created default config file at {config_path_display}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_xray() -> Command {
    return Command::new("xray")
        .about("Analyze a chest X-ray image for TB, COVID, and pneumonia indicators.")
        .arg(
            clap::Arg::new("file")
                .help("Path to a chest X-ray image (JPEG or PNG).")
                .required(true),
        );
}

fn subcommand_cough() -> Command {
    return Command::new("cough")
        .about("Analyze a cough sample from an audio file or a recording session.")
        .arg(
            clap::Arg::new("file")
                .help("Path to an audio file (MP3, WAV, or M4A).")
                .required_unless_present("record"),
        )
        .arg(
            clap::Arg::new("record")
                .short('r')
                .long("record")
                .help("Record a sample from the capture device instead of reading a file.")
                .action(ArgAction::SetTrue),
        );
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Start an interactive health assistant chat. Use /quit to leave.")
        .arg(
            clap::Arg::new("voice")
                .long("voice")
                .help("Fill the first prompt using speech recognition.")
                .action(ArgAction::SetTrue),
        );
}

fn arg_assistant_model() -> Arg {
    return Arg::new(ConfigKey::AssistantModel.to_string())
        .short('m')
        .long(ConfigKey::AssistantModel.to_string())
        .env("DIAGNOX_ASSISTANT_MODEL")
        .num_args(1)
        .help(format!(
            "The model used by the health assistant chat. [default: {}]",
            Config::default(ConfigKey::AssistantModel)
        ));
}

fn arg_assistant_token() -> Arg {
    return Arg::new(ConfigKey::AssistantToken.to_string())
        .long(ConfigKey::AssistantToken.to_string())
        .env("DIAGNOX_ASSISTANT_TOKEN")
        .num_args(1)
        .help("API token for the hosted generative-language service powering the chat.");
}

fn arg_assistant_url() -> Arg {
    return Arg::new(ConfigKey::AssistantUrl.to_string())
        .long(ConfigKey::AssistantUrl.to_string())
        .env("DIAGNOX_ASSISTANT_URL")
        .num_args(1)
        .help(format!(
            "Generative-language API URL powering the health assistant chat. [default: {}]",
            Config::default(ConfigKey::AssistantUrl)
        ));
}

fn arg_backend_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
        .long(ConfigKey::BackendHealthCheckTimeout.to_string())
        .env("DIAGNOX_BACKEND_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when doing a backend health check. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)),
        );
}

fn arg_capture() -> Arg {
    return Arg::new(ConfigKey::Capture.to_string())
        .long(ConfigKey::Capture.to_string())
        .env("DIAGNOX_CAPTURE")
        .num_args(1)
        .help(format!(
            "The audio capture device used for cough recordings. [default: {}]",
            Config::default(ConfigKey::Capture)
        ))
        .value_parser(PossibleValuesParser::new(CaptureName::VARIANTS));
}

fn arg_cough_backend() -> Arg {
    return Arg::new(ConfigKey::CoughBackend.to_string())
        .long(ConfigKey::CoughBackend.to_string())
        .env("DIAGNOX_COUGH_BACKEND")
        .num_args(1)
        .help(format!(
            "The backend consulted for cough analysis. [default: {}]",
            Config::default(ConfigKey::CoughBackend)
        ))
        .value_parser(PossibleValuesParser::new(AudioBackendName::VARIANTS));
}

fn arg_cough_url() -> Arg {
    return Arg::new(ConfigKey::CoughUrl.to_string())
        .long(ConfigKey::CoughUrl.to_string())
        .env("DIAGNOX_COUGH_URL")
        .num_args(1)
        .help(format!(
            "Cough classifier API URL when using the http cough backend. [default: {}]",
            Config::default(ConfigKey::CoughUrl)
        ));
}

fn arg_speech() -> Arg {
    return Arg::new(ConfigKey::Speech.to_string())
        .long(ConfigKey::Speech.to_string())
        .env("DIAGNOX_SPEECH")
        .num_args(1)
        .help(format!(
            "The speech recognizer used for voice input in chat. [default: {}]",
            Config::default(ConfigKey::Speech)
        ))
        .value_parser(PossibleValuesParser::new(SpeechName::VARIANTS));
}

fn arg_xray_url() -> Arg {
    return Arg::new(ConfigKey::XrayUrl.to_string())
        .long(ConfigKey::XrayUrl.to_string())
        .env("DIAGNOX_XRAY_URL")
        .num_args(1)
        .help(format!(
            "X-ray classifier API URL. [default: {}]",
            Config::default(ConfigKey::XrayUrl)
        ));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION")
    );

    return Command::new("diagnox")
        .about(about)
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(true)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_cough())
        .subcommand(subcommand_xray())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("DIAGNOX_CONFIG_FILE")
                .num_args(1)
                .help(format!(
                    "Path to configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                ))
                .global(true),
        )
        .arg(arg_assistant_model().global(true))
        .arg(arg_assistant_token().global(true))
        .arg(arg_assistant_url().global(true))
        .arg(arg_backend_health_check_timeout().global(true))
        .arg(arg_capture().global(true))
        .arg(arg_cough_backend().global(true))
        .arg(arg_cough_url().global(true))
        .arg(arg_speech().global(true))
        .arg(arg_xray_url().global(true));
}

pub async fn parse() -> Result<()> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        Some(("xray", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let file = subcmd_matches.get_one::<String>("file").unwrap();
            commands::xray(path::Path::new(file)).await?;
        }
        Some(("cough", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            if subcmd_matches.get_flag("record") {
                commands::cough_record().await?;
            } else {
                let file = subcmd_matches.get_one::<String>("file").unwrap();
                commands::cough_file(path::Path::new(file)).await?;
            }
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            commands::chat(subcmd_matches.get_flag("voice")).await?;
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(());
}
