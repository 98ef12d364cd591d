use crate::domain::model::InformeData;
use crate::domain::ports::{Notifier, ReportGenerator, Repository};

/// Generates, notifies and stores an informe through injected capabilities.
pub struct InformeService<G: ReportGenerator, N: Notifier, R: Repository> {
    generator: G,
    notifier: N,
    repository: R,
}

impl<G: ReportGenerator, N: Notifier, R: Repository> InformeService<G, N, R> {
    pub fn new(generator: G, notifier: N, repository: R) -> Self {
        Self {
            generator,
            notifier,
            repository,
        }
    }

    pub fn process(&self, data: &InformeData) {
        tracing::debug!("Processing informe ({} chars)", data.content.chars().count());
        self.generator.generate(data);
        self.notifier.notify(data);
        self.repository.save(data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    type CallLog = Arc<Mutex<Vec<String>>>;

    struct Recording {
        name: &'static str,
        log: CallLog,
    }

    impl Recording {
        fn push(&self, data: &InformeData) {
            self.log
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, data.content));
        }
    }

    impl ReportGenerator for Recording {
        fn generate(&self, data: &InformeData) {
            self.push(data);
        }
    }

    impl Notifier for Recording {
        fn notify(&self, data: &InformeData) {
            self.push(data);
        }
    }

    impl Repository for Recording {
        fn save(&self, data: &InformeData) {
            self.push(data);
        }
    }

    #[test]
    fn test_process_calls_in_order() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let recorder = |name| Recording {
            name,
            log: log.clone(),
        };
        let service = InformeService::new(recorder("generate"), recorder("notify"), recorder("save"));

        service.process(&InformeData::new("ventas"));

        assert_eq!(
            *log.lock().unwrap(),
            vec!["generate:ventas", "notify:ventas", "save:ventas"]
        );
    }

    #[test]
    fn test_each_call_runs_the_whole_sequence() {
        let log: CallLog = Arc::new(Mutex::new(Vec::new()));
        let recorder = |name| Recording {
            name,
            log: log.clone(),
        };
        let service = InformeService::new(recorder("g"), recorder("n"), recorder("s"));

        service.process(&InformeData::default());
        service.process(&InformeData::new("x"));

        assert_eq!(
            *log.lock().unwrap(),
            vec!["g:", "n:", "s:", "g:x", "n:x", "s:x"]
        );
    }
}
