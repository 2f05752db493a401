/// 出力テキストから合否を判定する。
///
/// いずれの失敗マーカーも含まれなければ合格。
pub fn classify_output<S: AsRef<str>>(output: &str, failure_markers: &[S]) -> bool {
    !failure_markers
        .iter()
        .map(AsRef::as_ref)
        .filter(|marker| !marker.is_empty())
        .any(|marker| output.contains(marker))
}
