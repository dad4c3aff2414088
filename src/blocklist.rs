//! Blocklist filtering and candidate ID screening.
//!
//! The default word table is multilingual and includes common leetspeak
//! spellings (digits standing in for letters). It is filtered against the
//! active alphabet once at construction time; `is_blocked` is the per-encode
//! screen applied to every candidate ID.

/// Retain the words usable with `alphabet`: at least three characters long
/// and composed entirely of (lowercased) alphabet characters. Retained words
/// are stored lowercased.
pub(crate) fn filter<'a, I>(alphabet: &[char], words: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let lowered: Vec<char> = alphabet.iter().map(|c| c.to_ascii_lowercase()).collect();

    words
        .into_iter()
        .filter_map(|word| {
            let word = word.to_lowercase();
            let usable =
                word.chars().count() >= 3 && word.chars().all(|c| lowered.contains(&c));
            usable.then_some(word)
        })
        .collect()
}

/// Does `id` match any blocklist word?
///
/// Comparison is case-insensitive. When either the word or the ID is at
/// most three characters, only exact equality matches; words containing a
/// digit match only as a prefix or suffix; all other words match as a
/// substring anywhere.
pub(crate) fn is_blocked(blocklist: &[String], id: &str) -> bool {
    let id = id.to_lowercase();

    for word in blocklist {
        if word.len() > id.len() {
            continue;
        }

        if id.len() <= 3 || word.len() <= 3 {
            if id == *word {
                return true;
            }
        } else if word.bytes().any(|b| b.is_ascii_digit()) {
            if id.starts_with(word.as_str()) || id.ends_with(word.as_str()) {
                return true;
            }
        } else if id.contains(word.as_str()) {
            return true;
        }
    }

    false
}

/// Built-in default word table, shared read-only by every codec built
/// without an explicit blocklist.
pub(crate) const DEFAULT_BLOCKLIST: &[&str] = &[
    "0rgasm", "1d10t", "1d1ot", "1di0t", "1diot", "1eccacu10", "1eccacu1o", "1eccacul0",
    "1eccaculo", "1mbec11e", "1mbec1le", "1mbeci1e", "1mbecile", "a11upat0", "a11upato",
    "a1lupat0", "a1lupato", "ah01e", "ah0le", "aho1e", "ahole", "al1upat0", "al1upato", "all6",
    "allupat0", "allupato", "ana1", "ana1e", "anal", "anale", "anus", "arrapat0", "arrapato",
    "arsch", "arse", "b00b", "b00be", "b0ob", "b0obe", "b1tch", "b1te", "bastard0", "bastardo",
    "batt0na", "battona", "bitch", "bite", "bo0b", "bo0be", "boob", "boobe", "bosta", "br0nca",
    "bronca", "buceta", "c0ck", "c0gli0ne", "c0glione", "c0na", "c0nnard", "c0nnasse", "c0nne",
    "c0u111es", "c0u11les", "c0u1l1es", "c0u1lles", "c0ui11es", "c0ui1les", "c0uil1es", "c0uilles",
    "c11t", "c11t0", "c11to", "c1it", "c1it0", "c1ito", "cabr0n", "cabra0", "cabrao", "cabron",
    "caca", "cacca", "cacete", "cagante", "cagar", "cagare", "cagna", "cara1h0", "cara1ho",
    "caralh0", "caralho", "cazz0", "cazz1", "cazzi", "cazzo", "ch00t1a", "ch00t1ya", "ch00tia",
    "ch00tiya", "ch0d", "ch0ot1a", "ch0ot1ya", "ch0otia", "ch0otiya", "chatte", "cho0t1a",
    "cho0t1ya", "cho0tia", "cho0tiya", "chod", "choot1a", "choot1ya", "chootia", "chootiya",
    "cl1t", "cl1t0", "cl1to", "clit", "clit0", "clito", "cock", "cog110ne", "cog11one", "cog1i0ne",
    "cog1ione", "cogl10ne", "cogl1one", "cogli0ne", "coglione", "cona", "connard", "connasse",
    "conne", "cou111es", "cou11les", "cou1l1es", "cou1lles", "coui11es", "coui1les", "couil1es",
    "couilles", "crap", "cu10", "cu1att0ne", "cu1attone", "cu1o", "cul0", "culatt0ne", "culattone",
    "culo", "cum", "cunt", "d11d0", "d11do", "d1ck", "d1ld0", "d1ldo", "damn", "de1ch", "dei1ch",
    "deich", "depp", "dick", "dild0", "dildo", "dyke", "encu1e", "encule", "enema", "enf01re",
    "enf0ire", "enfo1re", "enfoire", "estup1d0", "estup1do", "estupid0", "estupido", "etr0n",
    "etron", "f0da", "f0der", "f0ttere", "f0tters1", "f0ttersi", "f0tze", "f0utre", "f1ca",
    "f1cker", "f1ga", "faggot", "fica", "ficker", "figa", "foda", "foder", "fottere", "fotters1",
    "fottersi", "fotze", "foutre", "fr0c10", "fr0c1o", "fr0ci0", "fr0cio", "fr0sc10", "fr0sc1o",
    "fr0sci0", "fr0scio", "froc10", "froc1o", "froci0", "frocio", "frosc10", "frosc1o", "frosci0",
    "froscio", "fuck", "g00", "g0o", "go0", "goo", "gr0gnasse", "grognasse", "haram1", "harami",
    "haramzade", "hund1n", "hundin", "id10t", "id1ot", "idi0t", "idiot", "imbec11e", "imbec1le",
    "imbeci1e", "imbecile", "j1zz", "jerk", "jizz", "kam1ne", "kamine", "leccacu10", "leccacu1o",
    "leccacul0", "leccaculo", "m1erda", "m1nch1a", "m1nchia", "mam0n", "mamahuev0", "mamahuevo",
    "mamon", "masturbat10n", "masturbat1on", "masturbati0n", "masturbation", "merd0s0", "merd0so",
    "merda", "merde", "merdos0", "merdoso", "mierda", "mocc010", "mocc01o", "mocc0i0", "mocc0io",
    "moccolo", "muschi", "nerch1a", "nerchia", "orgasm", "p00p", "p0mp1n0", "p0mp1no", "p0mpin0",
    "p0mpino", "p0op", "p1rla", "p1sc10", "p1sc1o", "p1sci0", "p1scio", "p1sser", "patakha",
    "pec0r1na", "pec0rina", "pecor1na", "pecorina", "pen1s", "pene", "penis", "pip1", "pipi",
    "pirla", "pisc10", "pisc1o", "pisci0", "piscio", "piss", "po0p", "pomp1n0", "pomp1no",
    "pompin0", "pompino", "poop", "porca", "porn", "porra", "pouff1asse", "pouffiasse", "pr1ck",
    "prick", "pussy", "put1za", "puta", "puta1n", "putain", "pute", "putiza", "puttana", "queca",
    "queer", "rand1", "randi", "rape", "recht0n", "rechton", "retard", "s1ut", "sa10pe", "sa1aud",
    "sa1ope", "sal0pe", "salaud", "salope", "saugnapf", "sb0rr0ne", "sb0rra", "sb0rrone",
    "sbattere", "sbatters1", "sbattersi", "sborr0ne", "sborra", "sborrone", "sc0pare", "sc0pata",
    "sch1ampe", "sche1se", "sche1sse", "scheise", "scheisse", "schlampe", "schwachs1nn1g",
    "schwachs1nnig", "schwachsinn1g", "schwachsinnig", "schwanz", "scopare", "scopata", "sexy",
    "sh1t", "shit", "slut", "sp0mp1nare", "sp0mpinare", "spomp1nare", "spompinare", "str0nz0",
    "str0nza", "str0nzo", "stronz0", "stronza", "stronzo", "stup1d", "stupid", "succh1am1",
    "succh1ami", "succhiam1", "succhiami", "sucker", "t0pa", "tapette", "test1c1e", "test1cle",
    "testic1e", "testicle", "tette", "topa", "tr01a", "tr0ia", "tr0ya", "tro1a", "troia",
    "trombare", "troya", "turd", "twat", "vaffancu10", "vaffancu1o", "vaffancul0", "vaffanculo",
    "vag1na", "vagina", "verdammt", "verga", "w00se", "w0ose", "wank", "wh0re", "who0se", "whoose",
    "whore", "x0ch0ta", "x0chota", "xana", "xoch0ta", "xochota", "z0cc01a", "z0cc0la", "z0cco1a",
    "z0ccola", "zocc01a", "zocc0la", "zocco1a", "zoccola",];

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|w| (*w).to_string()).collect()
    }

    // ========== filter ==========

    #[test]
    fn test_filter_drops_short_words() {
        let kept = filter(&chars("abcde"), ["ab", "abc", "a"]);
        assert_eq!(kept, vec!["abc".to_string()]);
    }

    #[test]
    fn test_filter_drops_words_outside_alphabet() {
        let kept = filter(&chars("abcde"), ["abc", "abf", "xyz"]);
        assert_eq!(kept, vec!["abc".to_string()]);
    }

    #[test]
    fn test_filter_lowercases_matches_against_alphabet_case() {
        // uppercase alphabet still admits lowercase words and vice versa
        let kept = filter(&chars("ABCDE"), ["aBc", "BAD"]);
        assert_eq!(kept, vec!["abc".to_string(), "bad".to_string()]);
    }

    #[test]
    fn test_filter_default_table_against_default_alphabet() {
        let alphabet = chars(crate::config::DEFAULT_ALPHABET);
        let kept = filter(&alphabet, DEFAULT_BLOCKLIST.iter().copied());
        assert_eq!(kept.len(), DEFAULT_BLOCKLIST.len());
    }

    #[test]
    fn test_filter_default_table_against_hex_alphabet() {
        let kept = filter(&chars("0123456789abcdef"), DEFAULT_BLOCKLIST.iter().copied());
        assert!(!kept.is_empty());
        assert!(kept.len() < DEFAULT_BLOCKLIST.len());
        assert!(kept.iter().all(|w| w.chars().all(|c| "0123456789abcdef".contains(c))));
    }

    // ========== is_blocked ==========

    #[test]
    fn test_short_word_only_matches_exactly() {
        let list = words(&["fuk"]);
        assert!(is_blocked(&list, "fuk"));
        assert!(is_blocked(&list, "FUK"));
        assert!(!is_blocked(&list, "afukb"));
    }

    #[test]
    fn test_digit_word_matches_prefix_and_suffix_only() {
        let list = words(&["sh1t"]);
        assert!(is_blocked(&list, "sh1tstorm"));
        assert!(is_blocked(&list, "totalsh1t"));
        assert!(!is_blocked(&list, "xxsh1txx"));
    }

    #[test]
    fn test_plain_word_matches_anywhere() {
        let list = words(&["shit"]);
        assert!(is_blocked(&list, "AshitB"));
        assert!(is_blocked(&list, "shitty"));
        assert!(!is_blocked(&list, "shot"));
    }

    #[test]
    fn test_word_longer_than_id_never_matches() {
        let list = words(&["longword"]);
        assert!(!is_blocked(&list, "long"));
    }

    #[test]
    fn test_empty_blocklist_blocks_nothing() {
        assert!(!is_blocked(&[], "anything"));
    }

    #[test]
    fn test_default_table_is_lowercase_and_sorted() {
        for pair in DEFAULT_BLOCKLIST.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
        assert!(
            DEFAULT_BLOCKLIST
                .iter()
                .all(|w| *w == w.to_lowercase().as_str())
        );
    }
}
