//! Query surface over the loaded co-occurring term statistics

use crate::{ReloadWorker, ServiceConfig, ServiceError};
use coterm_domain::{AssociationStat, CoTermRepository, LimitResolver, Partition};
use coterm_loader::{CoTermLoader, LoadReport};
use coterm_store::{CoTermStore, SharedCoTermStore};
use serde::Serialize;
use std::time::Duration;
use tracing::{error, info};

/// One co-occurring term in a query result
///
/// `compared_term_id` is the raw id; name lookup happens outside this crate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoTermResult {
    /// The term the query asked about
    pub target_term_id: String,
    /// The co-occurring term
    pub compared_term_id: String,
    /// Jaccard similarity, as a percentage
    pub similarity_percent: f64,
    /// Lift over chance
    pub probability_ratio: f64,
    /// Gene products annotated with both terms
    pub together_count: u64,
    /// Gene products annotated with the compared term
    pub compared_count: u64,
}

impl CoTermResult {
    fn from_stat(stat: &AssociationStat) -> Self {
        let record = stat.record();
        Self {
            target_term_id: record.target_term_id().to_string(),
            compared_term_id: record.compared_term_id().to_string(),
            similarity_percent: stat.similarity_percent(),
            probability_ratio: stat.probability_ratio(),
            together_count: record.together_count(),
            compared_count: record.compared_count(),
        }
    }
}

/// Parameters of a co-occurring terms query
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoTermQuery {
    /// Target term id
    pub term_id: String,

    /// Which partition to read
    pub partition: Partition,

    /// Raw limit as supplied by the user (`None`, a number, or `ALL`)
    pub limit: Option<String>,

    /// Only return terms at least this similar (percent, 0 to 100)
    pub similarity_threshold: Option<f64>,
}

impl CoTermQuery {
    /// Query a term in a partition with the default limit and no threshold
    pub fn new(term_id: impl Into<String>, partition: Partition) -> Self {
        Self {
            term_id: term_id.into(),
            partition,
            ..Default::default()
        }
    }

    /// Set the raw limit
    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = Some(limit.into());
        self
    }

    /// Set the similarity threshold
    pub fn with_similarity_threshold(mut self, threshold: f64) -> Self {
        self.similarity_threshold = Some(threshold);
        self
    }
}

/// Run a query against any repository
///
/// Results are in rank order. The threshold filters before the limit is
/// applied; a term without data yields an empty list.
pub fn find_co_terms<R: CoTermRepository>(
    repository: &R,
    resolver: &LimitResolver,
    query: &CoTermQuery,
) -> Result<Vec<CoTermResult>, ServiceError> {
    if query.term_id.trim().is_empty() {
        return Err(ServiceError::InvalidArgument(
            "term id cannot be empty".to_string(),
        ));
    }
    if let Some(threshold) = query.similarity_threshold {
        if !(0.0..=100.0).contains(&threshold) {
            return Err(ServiceError::InvalidArgument(format!(
                "similarity threshold should be between 0 and 100, not {}",
                threshold
            )));
        }
    }

    let limit = resolver.resolve(query.limit.as_deref())?;

    let Some(set) = repository.find(query.term_id.trim(), query.partition) else {
        return Ok(Vec::new());
    };

    let results = match query.similarity_threshold {
        Some(threshold) => set
            .ranked_by_similarity()
            .take_while(|stat| stat.similarity_percent() >= threshold)
            .take(limit)
            .map(CoTermResult::from_stat)
            .collect(),
        None => set.top_n(limit).iter().map(CoTermResult::from_stat).collect(),
    };

    Ok(results)
}

/// Load the configured sources, falling back to an empty store on failure
///
/// The failure is logged at error level and not returned, so the hosting
/// process keeps serving with "no data" answers.
pub fn load_or_empty(loader: &CoTermLoader) -> (CoTermStore, Option<LoadReport>) {
    match loader.load() {
        Ok(loaded) => {
            info!("{}", loaded.report.summary());
            (loaded.store, Some(loaded.report))
        }
        Err(e) => {
            error!("Failed to load co-occurring terms, serving an empty store: {}", e);
            (CoTermStore::empty(), None)
        }
    }
}

/// Co-occurring terms query service
///
/// # Examples
///
/// ```no_run
/// use coterm_domain::Partition;
/// use coterm_service::{CoTermService, ServiceConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = ServiceConfig::from_file("coterms.toml")?;
/// let service = CoTermService::start(config)?;
///
/// for term in service.top_co_occurring_terms("GO:0003824", Partition::Manual, Some("10"))? {
///     println!("{} {:.2}%", term.compared_term_id, term.similarity_percent);
/// }
/// # Ok(())
/// # }
/// ```
pub struct CoTermService {
    store: SharedCoTermStore,
    resolver: LimitResolver,
    loader: CoTermLoader,
    load_report: Option<LoadReport>,
}

impl CoTermService {
    /// Load the sources and start serving
    ///
    /// Only an invalid configuration is an error. If loading fails the
    /// service starts with an empty store.
    pub fn start(config: ServiceConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        let loader = CoTermLoader::new(config.loader.clone());
        let (store, load_report) = load_or_empty(&loader);

        Ok(Self {
            store: SharedCoTermStore::new(store),
            resolver: LimitResolver::new(config.default_limit)?,
            loader,
            load_report,
        })
    }

    /// Serve an already built store
    pub fn with_store(store: SharedCoTermStore, config: &ServiceConfig) -> Result<Self, ServiceError> {
        config.validate()?;
        Ok(Self {
            store,
            resolver: LimitResolver::new(config.default_limit)?,
            loader: CoTermLoader::new(config.loader.clone()),
            load_report: None,
        })
    }

    /// The most similar co-occurring terms for a target term
    pub fn top_co_occurring_terms(
        &self,
        term_id: &str,
        partition: Partition,
        raw_limit: Option<&str>,
    ) -> Result<Vec<CoTermResult>, ServiceError> {
        let query = CoTermQuery {
            term_id: term_id.to_string(),
            partition,
            limit: raw_limit.map(str::to_string),
            similarity_threshold: None,
        };
        self.find_co_terms(&query)
    }

    /// Run a query against the current store
    pub fn find_co_terms(&self, query: &CoTermQuery) -> Result<Vec<CoTermResult>, ServiceError> {
        let snapshot = self.store.snapshot();
        find_co_terms(&*snapshot, &self.resolver, query)
    }

    /// Report from the startup load; `None` if it failed
    pub fn load_report(&self) -> Option<&LoadReport> {
        self.load_report.as_ref()
    }

    /// Handle to the store being served
    pub fn store(&self) -> SharedCoTermStore {
        self.store.clone()
    }

    /// A worker that reloads this service's store on a schedule
    pub fn reload_worker(&self, interval: Duration) -> ReloadWorker {
        ReloadWorker::new(self.loader.clone(), self.store.clone(), interval)
    }
}
