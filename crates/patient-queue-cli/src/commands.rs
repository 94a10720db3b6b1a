//! Line commands for the terminal front end.

use patient_queue_core::{AdmissionForm, PatientQueueService, QueueError, SearchCriterion};

/// Help text listing every command.
pub const HELP: &str = r#"Commands:
  admit <id> <name> <age> <disease> <priority>   admit a patient (quote names with spaces)
  treat                                           treat the next patient
  remove <id>                                     dequeue a patient by ID
  find id <id> | find name <name>                 search both queues
  list                                            show both queues
  json | csv                                      export both queues
  help                                            show this help
  quit                                            exit"#;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Admit(AdmissionForm),
    Treat,
    Remove(String),
    Find(SearchCriterion, String),
    List,
    Json,
    Csv,
    Help,
    Quit,
}

/// Parse one line. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Command>, String> {
    let tokens = tokenize(line)?;
    let Some((head, args)) = tokens.split_first() else {
        return Ok(None);
    };

    let command = match (head.to_lowercase().as_str(), args) {
        ("admit", [id, name, age, disease, priority]) => Command::Admit(AdmissionForm {
            id: id.clone(),
            name: name.clone(),
            age: age.clone(),
            disease: disease.clone(),
            priority: priority.clone(),
        }),
        ("admit", _) => return Err("usage: admit <id> <name> <age> <disease> <priority>".into()),
        ("treat", []) => Command::Treat,
        ("remove", [id]) => Command::Remove(id.clone()),
        ("remove", _) => return Err("usage: remove <id>".into()),
        ("find", [criterion, rest @ ..]) if !rest.is_empty() => {
            Command::Find(criterion.parse()?, rest.join(" "))
        }
        ("find", _) => return Err("usage: find id <id> | find name <name>".into()),
        ("list", []) => Command::List,
        ("json", []) => Command::Json,
        ("csv", []) => Command::Csv,
        ("help", _) => Command::Help,
        ("quit" | "exit", _) => Command::Quit,
        (other, _) => return Err(format!("unknown command: {} (try `help`)", other)),
    };

    Ok(Some(command))
}

/// Split on whitespace, keeping double-quoted runs together.
fn tokenize(line: &str) -> Result<Vec<String>, String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quoted = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                quoted = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() || quoted {
                    tokens.push(std::mem::take(&mut current));
                }
                quoted = false;
            }
            c => current.push(c),
        }
    }

    if in_quotes {
        return Err("unterminated quote".into());
    }
    if !current.is_empty() || quoted {
        tokens.push(current);
    }
    Ok(tokens)
}

/// Run a command and render its outcome.
pub fn execute(service: &mut PatientQueueService, command: Command) -> String {
    match command {
        Command::Admit(form) => match service.admit_form(&form) {
            Ok(kind) => format!("Patient added! ({} queue)", kind),
            Err(e) => format!("Error: {}", e),
        },
        Command::Treat => match service.treat_next() {
            Ok(treated) => treated.treated_message(),
            Err(QueueError::EmptyQueues) => "No patients in queue!".into(),
            Err(e) => format!("Error: {}", e),
        },
        Command::Remove(id) => match service.remove_by_id_str(&id) {
            Ok(removed) => removed.message(),
            Err(QueueError::NotFound(_)) => "Patient ID not found in any queue.".into(),
            Err(e) => format!("Error: {}", e),
        },
        Command::Find(criterion, value) => match service.find(criterion, &value) {
            Ok(found) => format!("Patient Found\n{}", found.patient.summary(found.kind)),
            Err(QueueError::NotFound(_)) => "Patient not found!".into(),
            Err(e) => format!("Error: {}", e),
        },
        Command::List => service.snapshot().render_board(),
        Command::Json => service
            .snapshot()
            .to_json()
            .unwrap_or_else(|e| format!("Error: {}", e)),
        Command::Csv => service.snapshot().to_csv(),
        Command::Help => HELP.to_string(),
        Command::Quit => String::new(),
    }
}
