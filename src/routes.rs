//! Path-based route detection.
//!
//! The site ships as static pages; the shell only needs to know whether the
//! current document is the tracked portfolio page or one of the case-study
//! pages, which carry no tracker.

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CaseStudy {
    GraphGuard,
    InsurAi,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Route {
    Portfolio,
    CaseStudy(CaseStudy),
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let trimmed = path
            .trim_end_matches(".html")
            .trim_end_matches('/')
            .trim_start_matches('/');

        match trimmed {
            "case-study/graphguard" => Self::CaseStudy(CaseStudy::GraphGuard),
            "case-study/insurai" => Self::CaseStudy(CaseStudy::InsurAi),
            _ => Self::Portfolio,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_paths_resolve_to_the_portfolio() {
        assert_eq!(Route::from_path("/"), Route::Portfolio);
        assert_eq!(Route::from_path(""), Route::Portfolio);
        assert_eq!(Route::from_path("/index.html"), Route::Portfolio);
    }

    #[test]
    fn case_study_paths_resolve_with_and_without_suffix() {
        assert_eq!(
            Route::from_path("/case-study/graphguard"),
            Route::CaseStudy(CaseStudy::GraphGuard)
        );
        assert_eq!(
            Route::from_path("/case-study/insurai.html"),
            Route::CaseStudy(CaseStudy::InsurAi)
        );
        assert_eq!(
            Route::from_path("/case-study/graphguard/"),
            Route::CaseStudy(CaseStudy::GraphGuard)
        );
    }

    #[test]
    fn unknown_paths_fall_back_to_the_portfolio() {
        assert_eq!(Route::from_path("/anything/else"), Route::Portfolio);
    }
}
