use super::{Map, Matched, NoMatch};

use crate::request::ServerRequest;
use crate::route::Route;
use crate::rule::Rule;

impl Map {
    /// Matches a request against the routable routes in registration order.
    ///
    /// Each candidate is a fresh [`Route::candidate`] copy, so the map itself is
    /// never mutated. The first candidate passing every rule wins. If none
    /// does, the candidate that passed the most rules is reported.
    pub fn find<R>(&self, request: &R) -> Result<Matched, NoMatch>
    where
        R: ServerRequest + ?Sized,
    {
        let mut best: Option<(Route, usize)> = None;

        for route in self.routes.iter().filter(|r| r.is_routable()) {
            let mut candidate = route.candidate();

            match apply_rules(&mut candidate, request) {
                Ok(()) => {
                    let name = candidate.name().unwrap_or_default().to_owned();
                    tracing::debug!(route = %name, path = request.path(), "route matched");
                    return Ok(Matched {
                        name,
                        route: candidate,
                    });
                }
                Err(score) => {
                    tracing::debug!(
                        route = candidate.name().unwrap_or_default(),
                        rule = ?candidate.failed_rule(),
                        score,
                        "route failed"
                    );
                    if best.as_ref().map_or(true, |&(_, s)| score > s) {
                        best = Some((candidate, score));
                    }
                }
            }
        }

        Err(NoMatch {
            failed: best.map(|(route, _)| route),
        })
    }
}

/// Runs the pipeline, stopping at the first failing rule.
/// On failure returns how many rules passed.
fn apply_rules<R>(candidate: &mut Route, request: &R) -> Result<(), usize>
where
    R: ServerRequest + ?Sized,
{
    for (score, &rule) in Rule::PIPELINE.iter().enumerate() {
        if !rule.evaluate(candidate, request) {
            return Err(score);
        }
    }
    Ok(())
}
