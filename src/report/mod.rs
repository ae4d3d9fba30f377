//! Report scoring and formatting.
//!
//! A pure module: everything here is a function of its inputs. The report
//! layout and the 50/50 scoring rule are fixed and non-configurable; apart
//! from the score and the echoed fields, all section text is static
//! boilerplate.

use crate::config::PERF_SCORE_THRESHOLD;
use crate::pagespeed::PagespeedResult;
use crate::parse::SchemaFindings;

/// Inputs to the report formatter, one audit's worth of extracted fields.
pub struct ReportInput<'a> {
    /// Audited URL (normalized)
    pub url: &'a str,
    /// Target keyword as submitted
    pub keyword: &'a str,
    /// Page title, or "N/A"
    pub title: &'a str,
    /// First H1, or "N/A"
    pub h1: &'a str,
    /// Structured-data findings
    pub schema: &'a SchemaFindings,
    /// PageSpeed outcome
    pub pagespeed: &'a PagespeedResult,
    /// Extracted entities, at most three
    pub entities: &'a [String],
}

/// Computes the heuristic 0-100 audit score.
///
/// Fixed weights, no partial credit:
/// - +50 if the keyword appears in the title (case-insensitive substring)
/// - +50 if metrics are available and the performance score exceeds 50
///
/// H1, schema, and entities deliberately do not contribute.
pub fn compute_score(keyword: &str, title: &str, pagespeed: &PagespeedResult) -> u32 {
    let mut score = 0;

    if title.to_lowercase().contains(&keyword.to_lowercase()) {
        score += 50;
    }

    if let PagespeedResult::Available(metrics) = pagespeed {
        if metrics.perf_score > PERF_SCORE_THRESHOLD {
            score += 50;
        }
    }

    score
}

/// Formats the full multi-section audit report.
///
/// Section order is fixed: executive summary, technical diagnosis,
/// structured data analysis, content & NLP audit, entities & keyword
/// opportunities, action plan. Constructed once and returned; never mutated.
pub fn format_report(input: &ReportInput<'_>) -> String {
    let score = compute_score(input.keyword, input.title, input.pagespeed);

    let mut report = format!(
        "\nADVANCED SEO AUDIT REPORT\n\
         \n\
         EXECUTIVE SUMMARY\n\
         \n\
         Theoretical Score: {score}/100. Based on the correlation between the keyword {} and technical elements found on {}.\n\
         \n\
         TECHNICAL DIAGNOSIS AND PERFORMANCE\n\
         \n",
        input.keyword.to_uppercase(),
        input.url,
    );

    match input.pagespeed {
        PagespeedResult::Available(metrics) => {
            report.push_str(&format!(
                "Overall Score: {}\n\
                 Core Metrics: LCP at {}, CLS at {} and TBT at {}.\n\
                 Technical Verdict: Analysis based on Web Vitals provided by Google API.",
                metrics.perf_score, metrics.lcp, metrics.cls, metrics.tbt
            ));
        }
        PagespeedResult::Disabled => {
            report.push_str("Performance metrics disabled for this analysis.");
        }
    }

    report.push_str(&format!(
        "\n\
         \n\
         STRUCTURED DATA ANALYSIS (SCHEMA.ORG)\n\
         \n\
         Schema Status: {}\n\
         Rich Snippets Opportunity: Recommended implementation of FAQPage or Article to improve semantic visibility.\n\
         \n\
         CONTENT & NLP AUDIT\n\
         \n\
         Current Title Tag: {}\n\
         Current H1: {}\n\
         Coherence Analysis: Keyword {} presence in Title and H1 is essential for the RankBrain algorithm.\n\
         \n\
         ENTITIES & KEYWORD OPPORTUNITIES\n\
         \n",
        input.schema.display(),
        input.title,
        input.h1,
        input.keyword,
    ));

    for slot in 0..3 {
        report.push_str(&format!(
            "- Related Term {}: {}\n",
            slot + 1,
            input.entities.get(slot).map(String::as_str).unwrap_or("N/A")
        ));
    }

    report.push_str(&format!(
        "- New H2 Question (FAQ): How does this service solve problems related to {}?\n\
         \n\
         IMMEDIATE ACTION PLAN (HIGH PRIORITY)\n\
         \n\
         1. Fix performance metrics if LCP is above 2.5s.\n\
         2. Optimize semantic density for terms identified by NLP.\n\
         3. Validate heading hierarchy to ensure only one H1 exists.\n",
        input.keyword,
    ));

    report
}
