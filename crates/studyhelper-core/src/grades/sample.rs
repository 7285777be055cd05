//! Example mark sets used to demo a semester.

use super::engine::MarkInputs;

/// Example inputs for a semester, or an empty set for unknown keys.
pub fn sample_inputs(semester: &str) -> MarkInputs {
    let pairs: &[(&str, &str)] = match semester {
        "s1" => &[
            ("s1an1td", "12"), ("s1an1ex", "11"),
            ("s1alg1td", "13"), ("s1alg1ex", "12"),
            ("s1asd1td", "13"), ("s1asd1tp", "14"), ("s1asd1ex", "12"),
            ("s1ms1td", "12"), ("s1ms1ex", "10"),
            ("s1stenote", "15"),
            ("s1engnote", "16"),
            ("s1phy1td", "12"), ("s1phy1ex", "10"),
            ("s1electd", "11"), ("s1elecex", "12"),
        ],
        "s2" => &[
            ("s2an2td", "11"), ("s2an2ex", "12"),
            ("s2alg2td", "12"), ("s2alg2ex", "11"),
            ("s2asd2td", "12"), ("s2asd2tp", "13"), ("s2asd2ex", "11"),
            ("s2ms2td", "10"), ("s2ms2ex", "11"),
            ("s2probatd", "12"), ("s2probaex", "10"),
            ("s2ictnote", "16"),
            ("s2ptmtp", "13"), ("s2ptmex", "12"),
            ("s2phy2td", "11"), ("s2phy2ex", "10"),
        ],
        "s3" => &[
            ("s3algotd", "12"), ("s3algotp", "13"), ("s3algoex", "11"),
            ("s3architd", "11"), ("s3architp", "12"), ("s3archiex", "12"),
            ("s3tgtd", "10"), ("s3tgex", "10"),
            ("s3sitd", "14"), ("s3siex", "10"),
            ("s3mntd", "15"), ("s3mnex", "12"),
            ("s3lmtd", "13"), ("s3lmex", "9"),
            ("s3engnote", "16"),
        ],
        "s4" => &[
            ("s4ostd", "12"), ("s4ostp", "12"), ("s4osex", "11"),
            ("s4tltd", "13"), ("s4tlex", "10"),
            ("s4rxtd", "11"), ("s4rxtp", "12"), ("s4rxex", "12"),
            ("s4bdtd", "14"), ("s4bdtp", "15"), ("s4bdex", "11"),
            ("s4pootp", "13"), ("s4pooex", "10"),
            ("s4webtp", "14"), ("s4webex", "12"),
            ("s4engnote", "17"),
        ],
        "s5" => &[
            ("s5os2td", "12"), ("s5os2tp", "12"), ("s5os2ex", "11"),
            ("s5compiltd", "11"), ("s5compiltp", "12"), ("s5compilex", "10"),
            ("s5logptd", "13"), ("s5logpex", "11"),
            ("s5gl2td", "12"), ("s5gl2tp", "13"), ("s5gl2ex", "11"),
            ("s5mhitd", "14"), ("s5mhitp", "14"), ("s5mhiex", "12"),
            ("s5aitd", "14"), ("s5aiex", "12"),
            ("s5pltd", "12"), ("s5plex", "11"),
            ("s5engtd", "16"), ("s5engex", "14"),
        ],
        "s6" => &[
            ("s6mobtd", "13"), ("s6mobtp", "14"), ("s6mobex", "12"),
            ("s6sectd", "12"), ("s6secex", "11"),
            ("s6cryptotd", "12"), ("s6cryptoex", "10"),
            ("s6wstd", "13"), ("s6wsex", "12"),
            ("s6swtd", "14"), ("s6swex", "13"),
            ("s6projnote", "16"),
        ],
        _ => &[],
    };

    pairs
        .iter()
        .map(|(id, value)| (id.to_string(), value.to_string()))
        .collect()
}
