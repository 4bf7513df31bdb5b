//! capacity-runner: headless front end for the recruitment capacity model.
//!
//! Usage:
//!   capacity-runner --hires-1 900 --fte-hours 1500
//!   capacity-runner --config model.json --json
//!   capacity-runner --ipc-mode

use anyhow::{anyhow, Result};
use capacity_core::{
    command::InputCommand,
    config::ModelConfig,
    input_model::InputModel,
    report::ScenarioReport,
    session::Session,
    types::SessionId,
};
use std::env;
use std::io::{self, BufRead, Write};

#[derive(serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum IpcRequest {
    GetState,
    Command { command: InputCommand },
    Quit,
}

#[derive(serde::Serialize)]
struct UiState<'a> {
    session_id: &'a SessionId,
    revision:   u64,
    inputs:     &'a InputModel,
    reports:    Vec<ScenarioReport>,
}

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let ipc_mode = args.iter().any(|a| a == "--ipc-mode");
    let json_output = args.iter().any(|a| a == "--json");
    let config_path = flag_value(&args, "--config")?;

    let model = match config_path {
        Some(path) => ModelConfig::load(path)?.into_model()?,
        None => InputModel::default(),
    };
    let mut session = Session::new(model);
    session.apply_all(&overrides_from_args(&args)?)?;

    if ipc_mode {
        let stdin = io::stdin();
        run_ipc_loop(&mut session, stdin.lock(), io::stdout())?;
    } else {
        let reports = session.recompute()?;
        if json_output {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        } else {
            print_reports(&session, &reports);
        }
    }

    Ok(())
}

/// Sidebar-style overrides, applied as ordinary commands so they
/// pass the same validation as interactive edits.
fn overrides_from_args(args: &[String]) -> Result<Vec<InputCommand>> {
    let mut commands = Vec::new();
    for (scenario, flag) in ["--hires-1", "--hires-2", "--hires-3"].iter().enumerate() {
        if let Some(total_hires) = parse_opt(args, flag)? {
            commands.push(InputCommand::SetScenarioHires { scenario, total_hires });
        }
    }
    if let Some(hours) = parse_opt(args, "--fte-hours")? {
        commands.push(InputCommand::SetFteHoursPerYear { hours });
    }
    if let Some(salary) = parse_opt(args, "--salary")? {
        commands.push(InputCommand::SetAverageSalary { salary });
    }
    if let Some(percent) = parse_opt(args, "--on-cost")? {
        commands.push(InputCommand::SetOnCostPercent { percent });
    }
    Ok(commands)
}

/// JSON-lines loop: one reply line per request until `quit` or EOF.
fn run_ipc_loop<R: BufRead, W: Write>(
    session: &mut Session,
    mut input: R,
    mut output: W,
) -> Result<()> {
    let mut buffer = String::new();

    loop {
        buffer.clear();
        let bytes_read = input.read_line(&mut buffer)?;
        if bytes_read == 0 {
            break; // EOF
        }
        if buffer.trim().is_empty() {
            continue;
        }

        let request: IpcRequest = match serde_json::from_str(&buffer) {
            Ok(r) => r,
            Err(e) => {
                write_error(&mut output, &e.to_string())?;
                continue;
            }
        };

        match request {
            IpcRequest::Quit => break,
            IpcRequest::GetState => write_state(&mut output, session)?,
            IpcRequest::Command { command } => match session.apply(&command) {
                Ok(()) => write_state(&mut output, session)?,
                Err(e) => write_error(&mut output, &e.to_string())?,
            },
        }
    }
    Ok(())
}

fn write_state(out: &mut impl Write, session: &mut Session) -> Result<()> {
    let reports = session.recompute()?;
    let state = UiState {
        session_id: &session.session_id,
        revision:   session.revision(),
        inputs:     session.model(),
        reports,
    };
    writeln!(out, "{}", serde_json::to_string(&state)?)?;
    out.flush()?;
    Ok(())
}

fn write_error(out: &mut impl Write, message: &str) -> Result<()> {
    let err_json = serde_json::json!({ "error": message });
    writeln!(out, "{}", err_json)?;
    out.flush()?;
    Ok(())
}

fn print_reports(session: &Session, reports: &[ScenarioReport]) {
    let cost = session.model().cost();

    println!("Recruitment Capacity Model");
    println!("  session:      {}", session.session_id);
    println!("  fte hours/yr: {}", cost.fte_hours_per_year);
    println!("  avg salary:   {}", cost.average_salary);
    println!("  on-costs:     {:.0}%", cost.on_cost_percent * 100.0);
    println!();

    for report in reports {
        println!("{}", report.render());
        println!();
    }
}

/// Raw value following `flag`. A flag with no value, or followed by
/// another flag, is an error.
fn flag_value<'a>(args: &'a [String], flag: &str) -> Result<Option<&'a str>> {
    let Some(pos) = args.iter().position(|a| a == flag) else {
        return Ok(None);
    };
    match args.get(pos + 1) {
        Some(raw) if !raw.starts_with("--") => Ok(Some(raw.as_str())),
        _ => Err(anyhow!("missing value for {flag}")),
    }
}

fn parse_opt<T: std::str::FromStr>(args: &[String], flag: &str) -> Result<Option<T>> {
    match flag_value(args, flag)? {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| anyhow!("invalid value for {flag}: {raw}")),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("capacity-runner")
            .chain(list.iter().copied())
            .map(String::from)
            .collect()
    }

    fn run_lines(session: &mut Session, input: &str) -> Vec<serde_json::Value> {
        let mut out = Vec::new();
        run_ipc_loop(session, input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    fn make_session() -> Session {
        Session::with_id("runner-test".into(), InputModel::default())
    }

    // ── Argument mapping ─────────────────────────────────────────────────────

    #[test]
    fn hires_flag_maps_to_its_scenario() {
        let commands = overrides_from_args(&args(&["--hires-2", "900"])).unwrap();
        assert_eq!(
            commands,
            [InputCommand::SetScenarioHires { scenario: 1, total_hires: 900.0 }]
        );
    }

    #[test]
    fn cost_flags_map_to_cost_commands() {
        let commands = overrides_from_args(&args(&[
            "--fte-hours", "1500", "--salary", "95000", "--on-cost", "0.3", "--json",
        ]))
        .unwrap();
        assert_eq!(
            commands,
            [
                InputCommand::SetFteHoursPerYear { hours: 1500.0 },
                InputCommand::SetAverageSalary { salary: 95_000.0 },
                InputCommand::SetOnCostPercent { percent: 0.3 },
            ]
        );
    }

    #[test]
    fn unparseable_override_is_an_error() {
        let err = overrides_from_args(&args(&["--hires-1", "abc"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for --hires-1: abc");

        let err = overrides_from_args(&args(&["--salary", "lots"])).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for --salary: lots");
    }

    #[test]
    fn flag_without_value_is_an_error() {
        let err = flag_value(&args(&["--config"]), "--config").unwrap_err();
        assert_eq!(err.to_string(), "missing value for --config");

        let err = flag_value(&args(&["--config", "--json"]), "--config").unwrap_err();
        assert_eq!(err.to_string(), "missing value for --config");

        assert_eq!(flag_value(&args(&["--json"]), "--config").unwrap(), None);
    }

    // ── IPC loop ─────────────────────────────────────────────────────────────

    #[test]
    fn malformed_line_gets_error_and_loop_continues() {
        let mut session = make_session();
        let replies = run_lines(&mut session, "{\"type\":\"nope\"}\nnot json\n{\"type\":\"get_state\"}\n");

        assert_eq!(replies.len(), 3);
        assert!(replies[0]["error"].is_string());
        assert!(replies[1]["error"].is_string());
        assert_eq!(replies[2]["session_id"], "runner-test");
        assert_eq!(replies[2]["reports"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn rejected_command_replies_error_and_keeps_inputs() {
        let mut session = make_session();
        let input = concat!(
            r#"{"type":"command","command":{"cmd":"set_on_cost_percent","percent":2}}"#, "\n",
            r#"{"type":"get_state"}"#, "\n",
        );
        let replies = run_lines(&mut session, input);

        assert_eq!(replies.len(), 2);
        assert_eq!(replies[0]["error"], "on_cost_percent = 2 is outside [0, 1]");
        assert_eq!(replies[1]["revision"], 0);
        assert_eq!(replies[1]["inputs"]["cost"]["on_cost_percent"], 0.2);
        assert_eq!(session.model(), &InputModel::default());
    }

    #[test]
    fn applied_command_replies_with_new_state() {
        let mut session = make_session();
        let input = concat!(
            r#"{"type":"command","command":{"cmd":"set_scenario_hires","scenario":0,"total_hires":1600}}"#,
            "\n",
        );
        let replies = run_lines(&mut session, input);

        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["revision"], 1);
        assert_eq!(replies[0]["reports"][0]["total_hires"], 1600.0);
        assert_eq!(replies[0]["reports"][1]["total_hires"], 1000.0);
    }

    #[test]
    fn quit_stops_reading() {
        let mut session = make_session();
        let input = concat!(
            r#"{"type":"quit"}"#, "\n",
            r#"{"type":"command","command":{"cmd":"set_average_salary","salary":1}}"#, "\n",
            r#"{"type":"get_state"}"#, "\n",
        );
        let replies = run_lines(&mut session, input);

        assert!(replies.is_empty());
        assert_eq!(session.revision(), 0);
    }

    #[test]
    fn eof_ends_loop_cleanly() {
        let mut session = make_session();
        let replies = run_lines(&mut session, "\n{\"type\":\"get_state\"}");

        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["revision"], 0);
    }
}
