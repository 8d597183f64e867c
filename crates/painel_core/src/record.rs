/// Placeholder stored in a field whose selector matched nothing.
pub const NOT_INFORMED: &str = "Não informado";

/// Column headers, in the order the fields are displayed.
pub const COLUMN_HEADERS: [&str; 4] = ["Título", "Empresa", "Localização", "Requisitos"];

/// One job posting as scraped from the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRecord {
    pub title: String,
    pub company: String,
    pub location: String,
    pub requirement: String,
}

impl Default for JobRecord {
    fn default() -> Self {
        Self {
            title: NOT_INFORMED.to_string(),
            company: NOT_INFORMED.to_string(),
            location: NOT_INFORMED.to_string(),
            requirement: NOT_INFORMED.to_string(),
        }
    }
}

impl JobRecord {
    /// Field values in [`COLUMN_HEADERS`] order.
    pub fn cells(&self) -> [&str; 4] {
        [
            self.title.as_str(),
            self.company.as_str(),
            self.location.as_str(),
            self.requirement.as_str(),
        ]
    }
}

/// Ordered job postings. Row order is document order; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JobTable {
    rows: Vec<JobRecord>,
}

impl JobTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn rows(&self) -> &[JobRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.title.as_str())
    }

    pub fn locations(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.location.as_str())
    }

    pub fn requirements(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|r| r.requirement.as_str())
    }
}

/// Collects extracted records into a table without reordering or filtering.
pub fn tabulate<I>(records: I) -> JobTable
where
    I: IntoIterator<Item = JobRecord>,
{
    JobTable {
        rows: records.into_iter().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_all_sentinel() {
        let record = JobRecord::default();
        assert!(record.cells().iter().all(|c| *c == NOT_INFORMED));
    }

    #[test]
    fn empty_input_gives_empty_table() {
        let table = tabulate(Vec::new());
        assert!(table.is_empty());
        assert_eq!(table.len(), 0);
    }
}
