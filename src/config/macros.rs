macro_rules! extract_bool {
    (
        $line: ident,
        $identifier: ident,
        $option: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line);
            $option = Some(Util::parse_bool($identifier, value)?);
            continue;
        }
    };
}

macro_rules! extract_tag_set {
    (
        $line: ident,
        $identifier: ident,
        $option: ident
    ) => {
        if $line.starts_with($identifier) {
            let value = Util::str_extract_value($identifier, $line);
            $option = Some(Util::normalize_tags(Util::split_values(value)));
            continue;
        }
    };
}
