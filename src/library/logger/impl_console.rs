use crate::library::logger::interface::{Level, Logger};
use chrono::Utc;
use std::io::Write;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct LoggerConsole {
    namespace: Option<String>,
    timezone: chrono::FixedOffset,
}

impl LoggerConsole {
    pub fn new(timezone: chrono::FixedOffset) -> Self {
        Self {
            namespace: None,
            timezone,
        }
    }

    fn format_line(&self, level: Level, message: &str) -> String {
        let local_time = Utc::now().with_timezone(&self.timezone);
        let formatted = local_time.format("%Y-%m-%d %I:%M:%S%.3f %p");
        match &self.namespace {
            Some(namespace) => format!("[{}] {:<5} {}: {}", formatted, level, namespace, message),
            None => format!("[{}] {:<5} {}", formatted, level, message),
        }
    }
}

impl Logger for LoggerConsole {
    fn log(&self, level: Level, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let line = self.format_line(level, message);
        match level {
            Level::Info => writeln!(std::io::stdout().lock(), "{}", line)?,
            Level::Warn | Level::Error => writeln!(std::io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn with_namespace(&self, namespace: &str) -> Arc<dyn Logger + Send + Sync> {
        let new_namespace = match &self.namespace {
            Some(current) => format!("{}:{}", current, namespace),
            None => namespace.to_string(),
        };

        Arc::new(LoggerConsole {
            namespace: Some(new_namespace),
            timezone: self.timezone,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Offset;

    #[test]
    fn test_namespaces_are_joined_with_colons() {
        let logger = LoggerConsole {
            namespace: Some("waste_app".to_string()),
            timezone: Utc.fix(),
        };

        let line = logger.format_line(Level::Warn, "hello");

        assert!(line.ends_with("WARN  waste_app: hello"), "{}", line);
    }

    #[test]
    fn test_root_logger_has_no_namespace() {
        let logger = LoggerConsole::new(Utc.fix());

        let line = logger.format_line(Level::Info, "hello");

        assert!(line.ends_with("INFO  hello"), "{}", line);
    }
}
