//! LLM-backed metadata inference

plain_command!(
    /// Infer metadata and summarise CSV data using an LLM
    ///
    /// qsv reads its LLM endpoint and key from `--base-url`/`--api-key` or
    /// from its own environment variables; none of that is resolved here.
    DescribeGpt
);

declare_params!(DescribeGpt {
    /// Produce dictionary, description and tags together; emitted as `--all`
    include_all: flag,
    description: flag,
    dictionary: flag,
    tags: flag,
    dictionary_output: text,
    ckan_api: text,
    ckan_token: text,
    stats_options: text,
    num_tags: int = "10",
    tag_vocab: text,
    cache_dir: text = "~/.qsv-cache",
    enum_threshold: int = "10",
    num_examples: int = "5",
    truncate_str: int = "25",
    addl_cols: flag,
    addl_cols_list: text = "sort_order, sortiness, mean, median, mad, stddev, variance, cv",
    prompt: text,
    sql_results: text,
    prompt_file: text,
    sample_size: int = "100",
    fewshot_examples: flag,
    session: text,
    session_len: int = "10",
    base_url: text,
    model: text,
    language: text,
    addl_props: text,
    api_key: text,
    max_tokens: int = "10000",
    timeout: int = "300",
    user_agent: text,
    export_prompt: text,
    no_cache: flag,
    disk_cache_dir: text,
    redis_cache: flag,
    fresh: flag,
    forget: flag,
    flush_cache: flag,
    /// Output format: markdown, tsv or json
    format: text = "markdown",
    output: text,
    quiet: flag,
    delimiter: text,
});
