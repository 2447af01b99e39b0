use log::{debug, info, warn};

use crate::data_loading::ScreeningTable;
use crate::error::{MetricError, ValidationError, ValidationResult};
use crate::evaluation::{
    average_precision, bedroc, enrichment_factor, f1_score, gh_score, precision_recall_curve, rie,
    roc_curve, roc_log_auc, round3, trapezoidal_auc, ConfusionMatrix, LogAucParams, MetricRecord,
    PrecisionRecallCurve, RankedSeries, RocCurve, DEFAULT_ALPHA, EF_FRACTION,
};
use crate::plotting::{PlotType, RenderContext};

/// Nastavenia enginu po overení builderom
#[derive(Debug, Clone, PartialEq)]
pub struct EngineSettings {
    pub active: String,
    pub predict: String,
    pub model: String,
    pub scores: String,
    pub auc_thresh: f64,
    /// Alternatívny stĺpec so skóre, metriky ho nepoužívajú
    pub rescore: Option<String>,
    pub plot_type: PlotType,
    pub figsize: Option<(f64, f64)>,
}

/// Miery z confusion matrix, zaokrúhlené
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfusionRates {
    pub sensitivity: f64,
    pub specificity: f64,
    pub precision: f64,
}

/// Metriky z rankingu podľa skóre, zaokrúhlené
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankingMetrics {
    pub auc_roc: f64,
    pub ap: f64,
    pub log_auc_roc: f64,
    pub ef1: f64,
    pub bedroc: f64,
    pub rie: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Composites {
    pub f1: f64,
    pub gh: f64,
}

/// Validácia jedného farmakoforového modelu nad tabuľkou výsledkov screeningu.
///
/// Postup: `compute_confusion_rates` -> `compute_ranking_metrics` ->
/// `compute_composites` -> `assemble_record` -> `maybe_plot`.
/// `metrics()` spustí prvé tri kroky, `validation()` celý postup.
/// Prvá chyba ukončí evaluáciu, stav ostáva len v tejto inštancii.
pub struct MetricsEngine<'a> {
    table: &'a ScreeningTable,
    series: RankedSeries,
    settings: EngineSettings,
    rates: Option<ConfusionRates>,
    ranking: Option<RankingMetrics>,
    composites: Option<Composites>,
    roc: Option<RocCurve>,
    pr: Option<PrecisionRecallCurve>,
}

impl<'a> MetricsEngine<'a> {
    pub(crate) fn new(table: &'a ScreeningTable, series: RankedSeries, settings: EngineSettings) -> Self {
        Self {
            table,
            series,
            settings,
            rates: None,
            ranking: None,
            composites: None,
            roc: None,
            pr: None,
        }
    }

    pub fn settings(&self) -> &EngineSettings {
        &self.settings
    }

    pub fn model(&self) -> &str {
        &self.settings.model
    }

    pub fn series(&self) -> &RankedSeries {
        &self.series
    }

    /// Hodnoty alternatívneho stĺpca so skóre, ak bol zadaný
    pub fn rescore_values(&self) -> Option<&'a [f64]> {
        let table = self.table;
        self.settings
            .rescore
            .as_deref()
            .and_then(|column| table.column(column).ok())
    }

    pub fn roc(&self) -> Option<&RocCurve> {
        self.roc.as_ref()
    }

    pub fn precision_recall(&self) -> Option<&PrecisionRecallCurve> {
        self.pr.as_ref()
    }

    pub fn rates(&self) -> Option<ConfusionRates> {
        self.rates
    }

    pub fn ranking(&self) -> Option<RankingMetrics> {
        self.ranking
    }

    pub fn composites(&self) -> Option<Composites> {
        self.composites
    }

    fn wrap(&self, err: MetricError) -> ValidationError {
        ValidationError::metric(&self.settings.model, err)
    }

    /// Sensitivity, specificity a precision z (aktivita, predikcia)
    pub fn compute_confusion_rates(&mut self) -> ValidationResult<ConfusionRates> {
        let cm = ConfusionMatrix::from_labels(self.series.labels(), self.series.predictions())
            .map_err(|e| self.wrap(e))?;
        debug!(
            "[{}] TP={} TN={} FP={} FN={}",
            self.settings.model, cm.tp, cm.tn, cm.fp, cm.fn_
        );

        let rates = ConfusionRates {
            sensitivity: round3(cm.sensitivity().map_err(|e| self.wrap(e))?),
            specificity: round3(cm.specificity().map_err(|e| self.wrap(e))?),
            precision: round3(cm.precision().map_err(|e| self.wrap(e))?),
        };
        self.rates = Some(rates);
        Ok(rates)
    }

    /// AUCROC, AP, logAUCROC, EF1%, BEDROC a RIE zo skóre
    pub fn compute_ranking_metrics(&mut self) -> ValidationResult<RankingMetrics> {
        let y = self.series.labels();
        let s = self.series.scores();

        let roc = roc_curve(y, s).map_err(|e| self.wrap(e))?;
        let auc_roc = trapezoidal_auc(&roc.fpr, &roc.tpr).map_err(|e| self.wrap(e))?;
        let ap = average_precision(y, s).map_err(|e| self.wrap(e))?;
        let pr = precision_recall_curve(y, s).map_err(|e| self.wrap(e))?;
        let log_auc_roc = roc_log_auc(y, s, LogAucParams::descending()).map_err(|e| self.wrap(e))?;
        let ef1 = enrichment_factor(y, s, EF_FRACTION).map_err(|e| self.wrap(e))?;
        let bedroc_value = bedroc(y, s, DEFAULT_ALPHA).map_err(|e| self.wrap(e))?;
        let rie_value = rie(y, s, DEFAULT_ALPHA).map_err(|e| self.wrap(e))?;

        let ranking = RankingMetrics {
            auc_roc: round3(auc_roc),
            ap: round3(ap),
            log_auc_roc: round3(log_auc_roc),
            ef1: round3(ef1),
            bedroc: round3(bedroc_value),
            rie: round3(rie_value),
        };
        debug!("[{}] {:?}", self.settings.model, ranking);

        self.roc = Some(roc);
        self.pr = Some(pr);
        self.ranking = Some(ranking);
        Ok(ranking)
    }

    /// F1 a GH z už zaokrúhlených mier
    pub fn compute_composites(&mut self) -> ValidationResult<Composites> {
        let rates = self.require_rates()?;
        let f1 = f1_score(rates.precision, rates.sensitivity).map_err(|e| self.wrap(e))?;
        let gh = gh_score(rates.precision, rates.sensitivity, rates.specificity);

        let composites = Composites {
            f1: round3(f1),
            gh: round3(gh),
        };
        self.composites = Some(composites);
        Ok(composites)
    }

    /// Vypočíta všetky metriky (bez tabuľky a grafov)
    pub fn metrics(&mut self) -> ValidationResult<()> {
        self.compute_confusion_rates()?;
        self.compute_ranking_metrics()?;
        self.compute_composites()?;
        Ok(())
    }

    /// Zostaví riadok tabuľky z vypočítaných metrík
    pub fn assemble_record(&self) -> ValidationResult<MetricRecord> {
        let rates = self.require_rates()?;
        let ranking = self.ranking.ok_or_else(|| not_computed("ranking metriky"))?;
        let composites = self.composites.ok_or_else(|| not_computed("F1 a GH"))?;

        Ok(MetricRecord {
            model: self.settings.model.clone(),
            sensitivity: round3(rates.sensitivity),
            specificity: round3(rates.specificity),
            precision: round3(rates.precision),
            f1: round3(composites.f1),
            ap: round3(ranking.ap),
            auc_roc: round3(ranking.auc_roc),
            log_auc_roc: round3(ranking.log_auc_roc),
            bedroc: round3(ranking.bedroc),
            gh: round3(composites.gh),
            ef1: round3(ranking.ef1),
            rie: round3(ranking.rie),
        })
    }

    /// Pridá krivky modelu do kontextu, ak Sensitivity != 0 a AUCROC > auc_thresh.
    /// Vracia, či sa niečo kreslilo.
    pub fn maybe_plot(&self, ctx: &mut RenderContext) -> ValidationResult<bool> {
        let rates = self.require_rates()?;
        let ranking = self.ranking.ok_or_else(|| not_computed("ranking metriky"))?;

        if rates.sensitivity == 0.0 || ranking.auc_roc <= self.settings.auc_thresh {
            warn!(
                "[{}] graf sa nekreslí (Sensitivity = {}, AUCROC = {}, prah = {})",
                self.settings.model, rates.sensitivity, ranking.auc_roc, self.settings.auc_thresh
            );
            return Ok(false);
        }

        let (roc, pr) = match (&self.roc, &self.pr) {
            (Some(roc), Some(pr)) => (roc, pr),
            _ => return Err(not_computed("ROC a PR krivky")),
        };

        if let Some(figsize) = self.settings.figsize {
            ctx.apply_figsize(figsize)?;
        }

        let model = &self.settings.model;
        let roc_label = format!("{} (AUC = {:.3})", model, ranking.auc_roc);
        let pr_label = format!("{} (AP = {:.3})", model, ranking.ap);
        match self.settings.plot_type {
            PlotType::Auc => ctx.add_roc(roc_label, &roc.fpr, &roc.tpr),
            PlotType::Ap => ctx.add_precision_recall(pr_label, &pr.recall, &pr.precision),
            PlotType::Both => {
                ctx.add_roc(roc_label, &roc.fpr, &roc.tpr);
                ctx.add_precision_recall(pr_label, &pr.recall, &pr.precision);
            }
        }
        Ok(true)
    }

    /// Celá validácia: metriky, riadok tabuľky a prípadne grafy
    pub fn validation(&mut self, ctx: &mut RenderContext) -> ValidationResult<MetricRecord> {
        self.metrics()?;
        let record = self.assemble_record()?;
        let plotted = self.maybe_plot(ctx)?;

        info!(
            "Validácia modelu '{}' dokončená: AUCROC={} EF1%={} BedROC={} (graf: {})",
            record.model, record.auc_roc, record.ef1, record.bedroc, plotted
        );
        Ok(record)
    }

    fn require_rates(&self) -> ValidationResult<ConfusionRates> {
        self.rates.ok_or_else(|| not_computed("sensitivity, specificity a precision"))
    }
}

fn not_computed(what: &str) -> ValidationError {
    ValidationError::NotComputed(what.to_string())
}
