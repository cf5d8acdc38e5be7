use crate::logger::interface::Logger;
use std::sync::{Arc, Mutex};

/// Captures log lines in memory so tests can assert on them.
pub struct LoggerFake {
    namespace: Option<String>,
    messages: Arc<Mutex<Vec<String>>>,
}

impl LoggerFake {
    pub fn new() -> Self {
        Self {
            namespace: None,
            messages: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn any_message_contains(&self, needle: &str) -> bool {
        self.messages()
            .iter()
            .any(|message| message.contains(needle))
    }
}

impl Logger for LoggerFake {
    fn info(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let line = match &self.namespace {
            Some(namespace) => format!("{}: {}", namespace, message),
            None => message.to_string(),
        };
        self.messages.lock().unwrap().push(line);
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerFake {
            namespace: Some(new_namespace),
            messages: self.messages.clone(),
        })
    }
}
