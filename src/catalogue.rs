use rustc_hash::FxHashMap;
use unidecode::unidecode;

/// Immutable code <-> place-name lookup. Built once by the caller and
/// injected wherever names are rendered; the routing core itself only ever
/// sees codes.
#[derive(Debug, Clone, Default)]
pub struct PlaceCatalogue {
    code_to_place: FxHashMap<String, String>,
    place_to_code: FxHashMap<String, String>,
}

impl PlaceCatalogue {
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        let mut code_to_place = FxHashMap::default();
        let mut place_to_code = FxHashMap::default();

        for (code, place) in pairs {
            let code: String = code.into();
            let place: String = place.into();
            // Two codes may share a place name; the first pair keeps the
            // name -> code mapping.
            place_to_code
                .entry(clean_name(&place))
                .or_insert_with(|| code.clone());
            code_to_place.insert(code, place);
        }

        Self {
            code_to_place,
            place_to_code,
        }
    }

    /// The Indian domestic airport table.
    pub fn indian_domestic() -> Self {
        Self::from_pairs(INDIAN_DOMESTIC.iter().copied())
    }

    pub fn place_name(&self, code: &str) -> Option<&str> {
        self.code_to_place.get(code).map(String::as_str)
    }

    /// Resolves a place name to its code, matching loosely (accents, case
    /// and stray whitespace ignored). Inputs that match no known place pass
    /// through trimmed, so codes resolve to themselves.
    pub fn resolve_code(&self, place_or_code: &str) -> String {
        match self.place_to_code.get(&clean_name(place_or_code)) {
            Some(code) => code.clone(),
            None => place_or_code.trim().to_string(),
        }
    }

    /// (code, place-name) lines for a legend, sorted by code; codes the
    /// catalogue does not know are skipped.
    pub fn legend<'a, I>(&self, codes: I) -> Vec<(String, String)>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut lines: Vec<(String, String)> = codes
            .into_iter()
            .filter_map(|code| {
                self.place_name(code)
                    .map(|place| (code.to_string(), place.to_string()))
            })
            .collect();
        lines.sort();
        lines.dedup();
        lines
    }

    pub fn len(&self) -> usize {
        self.code_to_place.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code_to_place.is_empty()
    }
}

/// Lookup key for place names: converted to ASCII, trimmed, lowercased,
/// inner whitespace collapsed.
fn clean_name(input: &str) -> String {
    unidecode(input)
        .trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<&str>>()
        .join(" ")
}

const INDIAN_DOMESTIC: &[(&str, &str)] = &[
    ("DEL", "New Delhi"),
    ("BLR", "Banglore"),
    ("BOM", "Mumbai"),
    ("MAA", "Chennai"),
    ("CCU", "Kolkata"),
    ("HYD", "Hyderabad"),
    ("COK", "Cochin"),
    ("PNQ", "Pune"),
    ("VTZ", "Visakhapatnam"),
    ("IXR", "Ranchi"),
    ("AMD", "Ahmedabad"),
    ("GOI", "Goa"),
    ("GAU", "Guwahati"),
    ("BBI", "Bhubaneswar"),
    ("VNS", "Varanasi"),
    ("PAT", "Patna"),
    ("JAI", "Jaipur"),
    ("KNU", "Kanpur"),
    ("NAG", "Nagpur"),
    ("IXC", "Chandigarh"),
    ("IXB", "Bagdogra"),
    ("IMF", "Imphal"),
    ("TRV", "Thiruvananthapuram"),
    ("IXM", "Madurai"),
    ("IXE", "Mangalore"),
    ("LKO", "Lucknow"),
    ("STV", "Surat"),
    ("IDR", "Indore"),
    ("IXU", "Aurangabad"),
    ("IXD", "Prayagraj (Allahabad)"),
    ("BHO", "Bhopal"),
    ("ATQ", "Amritsar"),
    ("IXA", "Agartala"),
    ("IXL", "Leh"),
    ("IXJ", "Jammu"),
    ("DIB", "Dibrugarh"),
    ("BDQ", "Vadodara"),
    ("IXS", "Silchar"),
    ("IXZ", "Port Blair"),
    ("RPR", "Raipur"),
    ("TIR", "Tirupati"),
    ("DHM", "Dharamshala"),
    ("SLV", "Shimla"),
    ("UDR", "Udaipur"),
    ("IXY", "Kandla"),
    ("JLR", "Jabalpur"),
    ("GWL", "Gwalior"),
    ("JDH", "Jodhpur"),
    ("JSA", "Jaisalmer"),
    ("BKB", "Bikaner"),
    ("IXG", "Belgaum"),
    ("IXI", "Lilabari"),
    ("PBD", "Porbandar"),
    ("IXW", "Jamshedpur"),
    ("TEE", "Tezpur"),
    ("SXR", "Srinagar"),
    ("LDA", "Ludhiana"),
    ("DMU", "Dimapur"),
    ("HJR", "Khajuraho"),
    ("SAG", "Shirdi"),
    ("JGB", "Jagdalpur"),
    ("CNN", "Kannur"),
    ("MYQ", "Mysore"),
    ("VGA", "Vijayawada"),
    ("RJA", "Rajahmundry"),
    ("JRH", "Jorhat"),
    ("GAY", "Gaya"),
    ("BUP", "Bathinda"),
    ("AJL", "Aizawl"),
    ("SHL", "Shillong"),
    ("KQH", "Kishangarh"),
    ("IXV", "Along"),
    ("TEZ", "Tezpur"),
    ("KUU", "Kullu Manali"),
    ("IXP", "Pathankot"),
];
