//! Reference listing the traced algorithm follows line by line.

/// Source lines of the reference quicksort. `Step::source_line` indexes this.
pub const REFERENCE_LISTING: &[&str] = &[
    "def quick_sort(arr, low, high):",
    "    if low < high:",
    "        pi = partition(arr, low, high)",
    "        quick_sort(arr, low, pi - 1)",
    "        quick_sort(arr, pi + 1, high)",
    "",
    "def partition(arr, low, high):",
    "    pivot = arr[high]",
    "    i = low - 1",
    "    for j in range(low, high):",
    "        if arr[j] < pivot:",
    "            i += 1",
    "            arr[i], arr[j] = arr[j], arr[i]",
    "    arr[i+1], arr[high] = arr[high], arr[i+1]",
];

/// Language label shown above the listing.
pub const LISTING_LANGUAGE: &str = "Python 3";
