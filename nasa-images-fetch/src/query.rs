use crate::{FetchError, SearchParams};
use url::{form_urlencoded, Url};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    /// Drop parameters whose value is empty instead of sending `name=`.
    pub omit_empty: bool,
}

/// Name/value pairs in the order the search endpoint documents them.
fn query_pairs(params: &SearchParams) -> [(&'static str, String); 9] {
    [
        ("q", params.query.clone()),
        ("center", params.center.code().to_string()),
        ("year_start", params.year_start.to_string()),
        ("year_end", params.year_end.to_string()),
        ("media_type", params.media_type.as_param().to_string()),
        ("location", params.location.clone()),
        ("photographer", params.photographer.clone()),
        ("secondary_creator", params.secondary_creator.clone()),
        ("keywords", params.keywords.clone()),
    ]
}

/// Form-encodes the search parameters. Values are not validated.
pub fn build_query(params: &SearchParams, options: QueryOptions) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (name, value) in query_pairs(params) {
        if options.omit_empty && value.is_empty() {
            continue;
        }
        serializer.append_pair(name, &value);
    }
    serializer.finish()
}

pub fn search_url(
    base_url: &str,
    params: &SearchParams,
    options: QueryOptions,
) -> Result<Url, FetchError> {
    let mut url = Url::parse(base_url).map_err(|source| FetchError::InvalidUrl {
        url: base_url.to_string(),
        source,
    })?;
    url.set_query(Some(&build_query(params, options)));
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Center, MediaType};

    fn moon_landing() -> SearchParams {
        SearchParams {
            query: "moon landing".into(),
            center: Center::Jsc,
            media_type: MediaType::Image,
            year_start: 1969,
            year_end: 1970,
            ..Default::default()
        }
    }

    #[test]
    fn test_build_query_moon_landing() {
        let query = build_query(&moon_landing(), QueryOptions::default());
        assert!(query.contains(
            "q=moon+landing&center=JSC&year_start=1969&year_end=1970&media_type=image"
        ));
    }

    #[test]
    fn test_build_query_keeps_empty_params() {
        let query = build_query(&SearchParams::default(), QueryOptions::default());
        assert_eq!(
            query,
            "q=&center=&year_start=1920&year_end=2024&media_type=image%2Cvideo%2Caudio\
             &location=&photographer=&secondary_creator=&keywords="
        );
    }

    #[test]
    fn test_build_query_omit_empty() {
        let query = build_query(&moon_landing(), QueryOptions { omit_empty: true });
        assert_eq!(
            query,
            "q=moon+landing&center=JSC&year_start=1969&year_end=1970&media_type=image"
        );
    }

    #[test]
    fn test_build_query_encodes_optional_fields() {
        let params = SearchParams {
            location: "Cape Canaveral, FL".into(),
            photographer: "Neil A. Armstrong".into(),
            keywords: "apollo 11&eva".into(),
            ..Default::default()
        };
        let query = build_query(&params, QueryOptions::default());
        assert!(query.contains("location=Cape+Canaveral%2C+FL"));
        assert!(query.contains("photographer=Neil+A.+Armstrong"));
        assert!(query.contains("keywords=apollo+11%26eva"));
    }

    #[test]
    fn test_build_query_passes_invalid_years_through() {
        let params = SearchParams {
            year_start: 2050,
            year_end: 1900,
            ..Default::default()
        };
        let query = build_query(&params, QueryOptions::default());
        assert!(query.contains("year_start=2050&year_end=1900"));
    }

    #[test]
    fn test_search_url() {
        let url = search_url(
            crate::DEFAULT_SEARCH_URL,
            &moon_landing(),
            QueryOptions { omit_empty: true },
        )
        .unwrap();
        assert_eq!(
            url.as_str(),
            "https://images-api.nasa.gov/search?q=moon+landing&center=JSC&year_start=1969&year_end=1970&media_type=image"
        );
    }

    #[test]
    fn test_search_url_invalid_base() {
        let result = search_url("not a url", &moon_landing(), QueryOptions::default());
        assert!(matches!(result, Err(FetchError::InvalidUrl { .. })));
    }
}
